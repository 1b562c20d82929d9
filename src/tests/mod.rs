
static ONCE: std::sync::Once = std::sync::Once::new();

/// Trace output for every test in the binary, installed once.
pub(crate) fn init_logging() {
    ONCE.call_once(|| {
        let _ = colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .is_test(true)
            .try_init();
    });
}
