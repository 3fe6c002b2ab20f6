/// Logs to stdout at `info`, or per `RUST_LOG` when it is set.
///
/// Returns false when a logger was already installed.
pub fn init_logging() -> bool {
    let env = env_logger::Env::default().default_filter_or("info");
    return env_logger::Builder::from_env(env)
        .target(env_logger::Target::Stdout)
        .try_init()
        .is_ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_ignored() {
        init_logging();
        assert!(!init_logging());
        log::info!("still logging");
    }
}
