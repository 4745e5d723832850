//! Pointer tracking and pointer-driven styles.
//!
//! [`PointerTracker`] is the only writer of [`POINTER`]. Mount it once near
//! the root; every [`use_pointer_styles`] consumer reads the shared position.

use std::rc::Rc;

use dioxus::prelude::*;
use plinth_core::pointer::{dynamic_styles, DynamicStyleOptions, Point, Rect};
use tracing::trace;

/// Last known pointer position in client coordinates
pub static POINTER: GlobalSignal<Point> = Signal::global(Point::default);

/// Records pointer movement anywhere inside its children into [`POINTER`]
#[component]
pub fn PointerTracker(#[props(default, into)] class: Option<String>, children: Element) -> Element {
    let class = class.unwrap_or_default();

    rsx! {
        div {
            class: "{class}",
            onmousemove: move |e: MouseEvent| {
                let at = e.client_coordinates();
                *POINTER.write() = Point::new(at.x, at.y);
            },
            {children}
        }
    }
}

/// Styles for one element, updated as the pointer moves
#[derive(Clone, Copy, PartialEq)]
pub struct PointerStyles {
    style: Memo<String>,
    element: Signal<Option<Rc<MountedData>>>,
    layout: Signal<u64>,
}

impl PointerStyles {
    /// Inline `style` value with the current custom properties
    pub fn style(&self) -> String {
        self.style.read().clone()
    }

    /// Attach to the element's `onmounted`
    pub fn mounted(&self, event: MountedEvent) {
        let mut element = self.element;
        element.set(Some(event.data()));
    }

    /// Attach to the element's `onresize` to re-measure after layout changes
    pub fn resized(&self, _event: ResizeEvent) {
        let mut layout = self.layout;
        layout += 1;
    }
}

/// Track the pointer relative to one element.
///
/// The element's rect is measured when it mounts and again on every
/// [`PointerStyles::resized`]; pointer moves only redo the angle math.
/// Until the first measurement the fallback styles apply.
///
/// # Example
///
/// ```rust,ignore
/// let glow = use_pointer_styles(DynamicStyleOptions::default());
///
/// rsx! {
///     div {
///         class: "dynamic-bg",
///         style: glow.style(),
///         onmounted: move |e| glow.mounted(e),
///         onresize: move |e| glow.resized(e),
///     }
/// }
/// ```
pub fn use_pointer_styles(options: DynamicStyleOptions) -> PointerStyles {
    let element = use_signal(|| None::<Rc<MountedData>>);
    let layout = use_signal(|| 0u64);
    let mut rect = use_signal(|| None::<Rect>);

    use_effect(move || {
        let _ = layout.read();
        let Some(target) = element() else {
            return;
        };
        spawn(async move {
            match target.get_client_rect().await {
                Ok(r) => rect.set(Some(Rect::new(r.origin.x, r.origin.y, r.width(), r.height()))),
                Err(err) => trace!(?err, "pointer target not measurable"),
            }
        });
    });

    let style = use_memo(move || dynamic_styles(POINTER(), rect(), &options).to_style());

    PointerStyles {
        style,
        element,
        layout,
    }
}

#[cfg(test)]
mod tests {
    use plinth_core::pointer::FallbackStyles;

    use super::*;

    fn unmeasured_card() -> Element {
        let glow = use_pointer_styles(DynamicStyleOptions::default());
        rsx! {
            div { id: "card", style: glow.style() }
        }
    }

    #[test]
    fn unmeasured_element_uses_fallback() {
        let mut dom = VirtualDom::new(unmeasured_card);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        let fallback = FallbackStyles::default();
        assert!(html.contains(&format!("--gradient-angle: {};", fallback.gradient_angle)), "{html}");
        assert!(html.contains(&format!("--shadow-y: {};", fallback.shadow_y)), "{html}");
    }
}
