//! rschedule main entrypoint.

use rschedule::run;
use rschedule::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
