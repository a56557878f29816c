//! trackpie main entrypoint.

use trackpie::run;
use trackpie::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
