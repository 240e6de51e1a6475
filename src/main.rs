//! Sphere Bounce entry point
//!
//! Headless native driver: spawns balls, runs the frame loop through the
//! fixed-rate clock and logs what happened. Drawing is left to a host renderer.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use sphere_bounce::render;
    use sphere_bounce::{FrameClock, Settings, Simulation, TickInput, tick};

    /// Command-line options
    #[derive(Debug)]
    pub struct Options {
        pub seed: Option<u64>,
        pub frames: u64,
        pub balls: u32,
        pub settings: Option<String>,
    }

    impl Default for Options {
        fn default() -> Self {
            Self {
                seed: None,
                frames: 600,
                balls: 10,
                settings: None,
            }
        }
    }

    impl Options {
        /// Parse `--seed N --frames N --balls N --settings PATH`
        pub fn parse(args: impl Iterator<Item = String>) -> Self {
            let mut options = Self::default();
            let mut args = args.skip(1);
            while let Some(arg) = args.next() {
                let flag = arg.as_str();
                if !matches!(flag, "--seed" | "--frames" | "--balls" | "--settings") {
                    log::warn!("Ignoring argument {flag}");
                    continue;
                }
                let Some(v) = args.next() else {
                    log::warn!("Missing value for {flag}");
                    break;
                };
                match flag {
                    "--seed" => options.seed = v.parse().ok().or(options.seed),
                    "--frames" => options.frames = v.parse().unwrap_or(options.frames),
                    "--balls" => options.balls = v.parse().unwrap_or(options.balls),
                    _ => options.settings = Some(v),
                }
            }
            options
        }
    }

    pub fn run(options: Options) {
        let settings = options
            .settings
            .as_deref()
            .map(Settings::load)
            .unwrap_or_default();
        let seed = options.seed.unwrap_or_else(rand::random);
        log::info!("Seed {seed}, settings {settings:?}");

        let mut sim = Simulation::with_settings(seed, settings);
        let mut clock = FrameClock::new();
        let mut input = TickInput {
            spawn: options.balls,
            ..Default::default()
        };

        let mut bounces = 0u64;
        let mut worst_overlap = f32::MIN;
        while sim.frame < options.frames {
            for _ in 0..clock.advance(sphere_bounce::consts::FRAME_DT) {
                tick(&mut sim, &input);
                input = TickInput::default();

                bounces += sim.drain_events().len() as u64;
                for p in &sim.particles {
                    let boundary = sim.boundary();
                    let overlap =
                        (p.position - boundary.center).length() + p.radius - boundary.radius;
                    worst_overlap = worst_overlap.max(overlap);
                }
            }
        }

        let instances = render::instances(&sim);
        log::info!(
            "Ran {} frames: {} balls, {} wall hits, worst overlap {:.2e}, {} instance bytes",
            sim.frame,
            instances.len(),
            bounces,
            worst_overlap,
            render::instance_bytes(&instances).len()
        );
    }
}


#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Sphere Bounce (native, headless) starting...");
    native::run(native::Options::parse(std::env::args()));
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web hosts drive the library directly
}
