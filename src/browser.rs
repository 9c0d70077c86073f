use std::{cell::RefCell, rc::Rc, time::Duration};

use gloo_timers::callback::Timeout;
use js_sys::{Array, Reflect};
use log::{debug, info};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};
use yew::prelude::*;

use crate::{
    navigation::ScrollSurface,
    reveal::{IntersectionSample, Subscription, Threshold, VisibilityTracker},
    timer::Scheduler,
};

/// `setTimeout`-backed scheduler; dropping the handle clears the timeout.
#[derive(Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule<F>(&self, delay: Duration, action: F) -> Timeout
    where
        F: FnOnce() + 'static,
    {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, action)
    }
}

/// Smooth-scrolls the element with the given id to the top of the viewport.
#[derive(Clone, Copy, Default)]
pub struct DocumentScroll;

impl ScrollSurface for DocumentScroll {
    fn scroll_to_top_of(&self, id: &str) -> bool {
        let Some(element) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            return false;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn mount_point() -> Option<Element> {
    window()?.document()?.get_element_by_id("app")
}

/// Reads `data-<name>` from the mount point.
pub fn mount_attribute(mount: Option<&Element>, name: &str) -> Option<String> {
    mount?.get_attribute(&format!("data-{name}"))
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

fn intersection_observer_supported() -> bool {
    let Some(win) = window() else {
        return false;
    };
    Reflect::has(&win, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// A live `IntersectionObserver` watching one element. The callback closure
/// is owned here so it outlives every notification the observer can send.
struct DomSubscription {
    observer: IntersectionObserver,
    target: Element,
    _callback: ObserverCallback,
}

impl Subscription for DomSubscription {
    fn unsubscribe(&mut self) {
        self.observer.unobserve(&self.target);
        self.observer.disconnect();
    }
}

type TrackerSlot = Rc<RefCell<Option<VisibilityTracker<DomSubscription>>>>;

fn attach_tracker(
    target: Element,
    threshold: Threshold,
    slot: &TrackerSlot,
    on_reveal: Callback<()>,
) -> Result<VisibilityTracker<DomSubscription>, JsValue> {
    let weak_slot = Rc::downgrade(slot);
    let callback: ObserverCallback = Closure::new(move |entries: Array, _: IntersectionObserver| {
        let Some(slot) = weak_slot.upgrade() else {
            return;
        };
        let mut revealed = false;
        if let Some(tracker) = slot.borrow_mut().as_mut() {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                revealed |= tracker.report(IntersectionSample {
                    intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                });
            }
        }
        if revealed {
            on_reveal.emit(());
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold.fraction()));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(&target);

    Ok(VisibilityTracker::observe(
        threshold,
        DomSubscription {
            observer,
            target,
            _callback: callback,
        },
    ))
}

/// Returns `true` once the element behind `node` has been on screen by at
/// least `threshold`. Never goes back to `false`.
#[hook]
pub fn use_reveal(node: NodeRef, threshold: Threshold) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with(node, move |node| {
            let slot: TrackerSlot = Rc::new(RefCell::new(None));
            let target = node.cast::<Element>();
            let section = target.as_ref().map(Element::id).unwrap_or_default();

            let tracker = match target {
                Some(target) if intersection_observer_supported() => {
                    let on_reveal = {
                        let revealed = revealed.clone();
                        let section = section.clone();
                        Callback::from(move |_: ()| {
                            debug!("section {section} revealed");
                            revealed.set(true);
                        })
                    };
                    attach_tracker(target, threshold, &slot, on_reveal).unwrap_or_else(|_| {
                        info!("intersection observer failed for {section}; showing immediately");
                        VisibilityTracker::unsupported()
                    })
                }
                _ => {
                    info!("intersection observer unavailable for {section}; showing immediately");
                    VisibilityTracker::unsupported()
                }
            };

            if tracker.is_revealed() {
                revealed.set(true);
            }
            *slot.borrow_mut() = Some(tracker);

            move || {
                let tracker = slot.borrow_mut().take();
                if let Some(mut tracker) = tracker {
                    tracker.teardown();
                }
            }
        });
    }

    *revealed
}
