// Wall-clock timing for pours. wasm32 has no `Instant`, so it reads the JS clock.

#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    started_at_ms: f64,
}

#[cfg(target_arch = "wasm32")]
impl PerfTimer {
    pub(crate) fn start() -> Self {
        Self { started_at_ms: js_sys::Date::now() }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        js_sys::Date::now() - self.started_at_ms
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    started_at: std::time::Instant,
}

#[cfg(not(target_arch = "wasm32"))]
impl PerfTimer {
    pub(crate) fn start() -> Self {
        Self { started_at: std::time::Instant::now() }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64() * 1000.0
    }
}
