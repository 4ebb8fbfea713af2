use std::process::ExitCode;

use log::error;
use zebra_crossing::SceneVariant;

fn main() -> ExitCode {
    zebra_crossing::init_logging();

    match zebra_crossing::run(SceneVariant::Plain) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
