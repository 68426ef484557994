//! Runtime effect-queue executor for reducer-emitted side effects.

use leptos::*;

use crate::{components, reducer::RuntimeEffect, runtime_context::DesktopRuntimeContext};

fn run_runtime_effect(effect: RuntimeEffect) {
    match effect {
        RuntimeEffect::FocusWindowInput(window_id) => {
            let frame_id = components::window_dom_id(window_id);
            let body_id = components::window_body_dom_id(window_id);
            // The frame may mount on the next tick when the window was just opened.
            request_animation_frame(move || {
                if components::focus_is_within(&frame_id) {
                    return;
                }
                if !components::focus_element_by_id(&body_id) {
                    logging::log!("no focus target for window `{window_id}`");
                }
            });
        }
    }
}

/// Installs the effect executor that drains reducer-emitted runtime effects in order.
pub fn install(runtime: DesktopRuntimeContext) {
    // Clear the queue before processing so nested dispatches enqueue a fresh batch.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            run_runtime_effect(effect);
        }
    });
}
