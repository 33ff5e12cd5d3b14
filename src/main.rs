use anyhow::Result;
use log::info;
use macroquad::prelude::*;
use game_of_life::{
    CliArgs, GameState, SimConfig, Viewport,
    input::{self, EventPoller},
    launch, rendering,
};

fn window_conf(config: &SimConfig) -> Conf {
    let (window_width, window_height) = config.window_pixels();
    Conf {
        window_title: config.title.clone(),
        window_width,
        window_height,
        window_resizable: false,
        platform: macroquad::miniquad::conf::Platform {
            swap_interval: Some(1),
            ..Default::default()
        },
        ..Default::default()
    }
}

async fn run(config: SimConfig) {
    // Window close goes through the event queue instead of killing the loop
    prevent_quit();

    let viewport = Viewport::new(config.window, config.grid);
    let mut state = GameState::new(&config);
    let mut poller = EventPoller::new();

    loop {
        state = input::apply_events(state, &viewport, poller.poll());
        if state.quit_requested {
            break;
        }

        state.advance(get_time() * 1000.0);

        rendering::draw_frame(&state, &viewport);
        next_frame().await;
    }

    info!("stopped at generation {}", state.generation);
}

fn main() -> Result<()> {
    env_logger::init();

    let config = match CliArgs::try_load_from(std::env::args_os()) {
        Ok(config) => config,
        Err(error) => match error.downcast_ref::<clap::Error>() {
            // --help and --version print to stdout and exit 0
            Some(clap_error) if !clap_error.use_stderr() => clap_error.exit(),
            _ => return Err(error),
        },
    };
    info!(
        "starting {} grid in {} window, {} ms per generation, rule {:?}",
        config.grid, config.window, config.step_ms, config.rule
    );

    let conf = window_conf(&config);
    launch::run_guarded(move || macroquad::Window::from_config(conf, run(config)))
}
