use bevy::prelude::*;

use pong::PongPlugins;

fn main() -> AppExit {
    App::new().add_plugins(PongPlugins).run()
}
