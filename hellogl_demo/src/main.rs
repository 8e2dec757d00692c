//! HelloGL demo - runs one tutorial scene in a window
//!
//! ```text
//! cargo run -p hellogl_demo -- --scene transform --width 1024 --height 768
//! ```

mod scenes;

use clap::Parser;
use hello_gl_engine::hellogl::{Config, Result};
use hello_gl_engine_backend_opengl::hellogl::App;
use scenes::Scene;

#[derive(Parser, Debug)]
#[command(about = "Render one LearnOpenGL scene; Escape closes the window")]
struct Args {
    /// Scene to render
    #[arg(long, value_enum, default_value_t = Scene::HelloTriangle)]
    scene: Scene,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Draw edges only
    #[arg(long)]
    wireframe: bool,

    /// Present as fast as possible
    #[arg(long)]
    no_vsync: bool,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            width: self.width,
            height: self.height,
            wireframe: self.wireframe,
            vsync: !self.no_vsync,
            ..Config::default()
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let scene = args.scene.describe()?;
    App::run(args.config(), scene)
}

fn main() {
    let args = Args::parse();
    if let Err(error) = run(&args) {
        eprintln!("{}", error);
        std::process::exit(1);
    }
}
