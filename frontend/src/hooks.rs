use log::error;
use yew::prelude::*;

use crate::dom::{DomGeometry, WindowScroll};
use crate::visibility::VisibilityWatcher;

/// Whether the element with `target_id` has entered the viewport, updated on
/// every window scroll while the calling component is mounted.
#[hook]
pub fn use_slide_in(target_id: &'static str) -> bool {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |target_id| {
                let target_id: &'static str = *target_id;
                let publish = Callback::from(move |value: bool| visible.set(value));

                let watcher = match WindowScroll::new() {
                    Ok(host) => {
                        let mut watcher = VisibilityWatcher::new(target_id, DomGeometry, host, publish);
                        match watcher.start() {
                            Ok(()) => Some(watcher),
                            Err(e) => {
                                error!("Could not watch #{}: {}", target_id, e);
                                None
                            }
                        }
                    }
                    Err(e) => {
                        error!("Could not watch #{}: {}", target_id, e);
                        None
                    }
                };

                // Detach on unmount or when the target changes
                move || {
                    if let Some(mut watcher) = watcher {
                        if let Err(e) = watcher.stop() {
                            error!("Could not stop watching #{}: {}", target_id, e);
                        }
                    }
                }
            },
            target_id,
        );
    }

    *visible
}
