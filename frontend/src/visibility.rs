use std::rc::Rc;

use log::{debug, trace, warn};
use thiserror::Error;
use yew::Callback;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub top: f64,
    pub viewport_height: f64,
}

/// One-sided check: the element stays "visible" after scrolling past it
/// upwards and only resets once its top falls back to or below the fold.
pub fn is_visible(geometry: &Geometry) -> bool {
    geometry.top < geometry.viewport_height
}

pub trait GeometrySource {
    /// `None` when the element is not in the rendered output yet.
    fn geometry(&self, id: &str) -> Option<Geometry>;
}

pub trait ScrollHost {
    type Registration;

    fn attach(&self, handler: Box<dyn FnMut()>) -> Result<Self::Registration, WatchError>;

    fn detach(&self, registration: Self::Registration) -> Result<(), WatchError>;
}

#[derive(Debug, Error)]
pub enum WatchError {
    #[error("no browser window available")]
    NoWindow,

    #[error("failed to add scroll listener: {0}")]
    Attach(String),

    #[error("failed to remove scroll listener: {0}")]
    Detach(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WatchOptions {
    pub initial_check: bool,
}

struct Evaluator<G> {
    target_id: String,
    geometry: G,
    publish: Callback<bool>,
}

impl<G: GeometrySource> Evaluator<G> {
    fn run(&self) {
        let Some(geometry) = self.geometry.geometry(&self.target_id) else {
            trace!("#{} not rendered yet, skipping", self.target_id);
            return;
        };
        let visible = is_visible(&geometry);
        trace!(
            "#{} top={} viewport={} visible={}",
            self.target_id,
            geometry.top,
            geometry.viewport_height,
            visible
        );
        self.publish.emit(visible);
    }
}

pub struct VisibilityWatcher<G: GeometrySource + 'static, H: ScrollHost> {
    evaluator: Rc<Evaluator<G>>,
    host: H,
    options: WatchOptions,
    registration: Option<H::Registration>,
}

impl<G: GeometrySource + 'static, H: ScrollHost> VisibilityWatcher<G, H> {
    pub fn new(target_id: impl Into<String>, geometry: G, host: H, publish: Callback<bool>) -> Self {
        Self::with_options(target_id, geometry, host, publish, WatchOptions::default())
    }

    pub fn with_options(
        target_id: impl Into<String>,
        geometry: G,
        host: H,
        publish: Callback<bool>,
        options: WatchOptions,
    ) -> Self {
        Self {
            evaluator: Rc::new(Evaluator {
                target_id: target_id.into(),
                geometry,
                publish,
            }),
            host,
            options,
            registration: None,
        }
    }

    pub fn target_id(&self) -> &str {
        &self.evaluator.target_id
    }

    pub fn is_active(&self) -> bool {
        self.registration.is_some()
    }

    pub fn start(&mut self) -> Result<(), WatchError> {
        if self.is_active() {
            debug!("Watcher for #{} already started", self.target_id());
            return Ok(());
        }

        let evaluator = Rc::clone(&self.evaluator);
        let registration = self.host.attach(Box::new(move || evaluator.run()))?;
        self.registration = Some(registration);
        debug!("Watching #{}", self.target_id());

        if self.options.initial_check {
            self.evaluate();
        }
        Ok(())
    }

    pub fn evaluate(&self) {
        self.evaluator.run();
    }

    pub fn stop(&mut self) -> Result<(), WatchError> {
        if let Some(registration) = self.registration.take() {
            self.host.detach(registration)?;
            debug!("Stopped watching #{}", self.target_id());
        }
        Ok(())
    }
}

impl<G: GeometrySource + 'static, H: ScrollHost> Drop for VisibilityWatcher<G, H> {
    fn drop(&mut self) {
        if let Err(err) = self.stop() {
            warn!("Failed to detach watcher for #{}: {}", self.target_id(), err);
        }
    }
}
