#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use axum::Router;
use envsense_api::models::{Sample, SampleField};
use rand::SeedableRng;
use rand::rngs::StdRng;

use envsense_server::app::build_router;
use envsense_server::errors::SampleError;
use envsense_server::services::{PageService, SampleGenerator, SampleSource};

/// Seeds a fresh generator from the call count, so every call is observable.
pub struct CountingSource {
    calls: AtomicUsize,
    generator: SampleGenerator,
}

impl CountingSource {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            generator: SampleGenerator::new().unwrap(),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn expected(&self, call: usize) -> Sample {
        self.generator
            .generate(&mut StdRng::seed_from_u64(call as u64))
            .unwrap()
    }
}

impl SampleSource for CountingSource {
    fn sample(&self) -> Result<Sample, SampleError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);

        self.generator.generate(&mut StdRng::seed_from_u64(call as u64))
    }
}

pub struct FailingSource;

impl SampleSource for FailingSource {
    fn sample(&self) -> Result<Sample, SampleError> {
        Err(SampleError::OutOfRange {
            field: SampleField::Temperature,
            value: f64::NAN,
        })
    }
}

/// Fails on its first call and delegates to a counting source afterwards.
pub struct FailOnceSource {
    failed: AtomicBool,
    inner: CountingSource,
}

impl FailOnceSource {
    pub fn new() -> Self {
        Self {
            failed: AtomicBool::new(false),
            inner: CountingSource::new(),
        }
    }
}

impl SampleSource for FailOnceSource {
    fn sample(&self) -> Result<Sample, SampleError> {
        if !self.failed.swap(true, Ordering::SeqCst) {
            return FailingSource.sample();
        }

        self.inner.sample()
    }
}

pub struct MockApp {
    pub router: Router,
    pub source: Arc<CountingSource>,
}

impl MockApp {
    pub fn new() -> Self {
        Self::with_page_service(PageService::embedded())
    }

    pub fn with_page_service(page_service: PageService) -> Self {
        let source = Arc::new(CountingSource::new());
        let router = build_router(source.clone(), Arc::new(page_service));

        Self { router, source }
    }

    pub fn with_failing_source() -> Router {
        build_router(Arc::new(FailingSource), Arc::new(PageService::embedded()))
    }

    pub fn with_fail_once_source() -> Router {
        build_router(Arc::new(FailOnceSource::new()), Arc::new(PageService::embedded()))
    }
}
