//! Browser host: SVG paths, `requestAnimationFrame` and `wasm-bindgen` exports.

use super::{Container, DrawTarget, FrameHandle, FrameScheduler, RandomSource};
use crate::{
    bolt::{geometry::Dimensions, BoltAnimator, Orientation},
    error::BoltError,
};
use std::{cell::RefCell, rc::Rc, sync::Once};
use tracing::warn;
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{console, Element, HtmlElement, Window};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Route panic messages to the browser console instead of an opaque `unreachable` trap.
fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        std::panic::set_hook(Box::new(|info| console::error_1(&format!("voltage: {info}").into())));
    });
}

/// Every `<path>` inside an SVG element.
pub struct SvgPathTarget {
    paths: Vec<Element>,
}

impl SvgPathTarget {
    pub fn from_svg(svg: &Element) -> Result<Self, BoltError> {
        let nodes = svg.query_selector_all("path").map_err(|_| BoltError::MissingPathElements)?;
        let paths: Vec<Element> =
            (0..nodes.length()).filter_map(|index| nodes.item(index)).filter_map(|node| node.dyn_into().ok()).collect();
        if paths.is_empty() {
            return Err(BoltError::MissingPathElements);
        }
        Ok(Self { paths })
    }
}

impl DrawTarget for SvgPathTarget {
    fn path_count(&self) -> usize {
        self.paths.len()
    }

    fn set_path_data(&mut self, index: usize, data: &str) {
        let Some(path) = self.paths.get(index) else { return };
        if let Err(e) = path.set_attribute("d", data) {
            warn!("failed to set path data: {e:?}");
        }
    }
}

/// The HTML element the SVG is laid out in.
pub struct HtmlContainer(HtmlElement);

impl Container for HtmlContainer {
    fn size(&self) -> Dimensions {
        Dimensions::new(self.0.offset_width() as f64, self.0.offset_height() as f64)
    }
}

/// Schedules frames through `window.requestAnimationFrame`, which browsers pause while the page
/// is hidden.
pub struct AnimationFrameScheduler {
    window: Window,
    callback: FrameCallback,
}

impl FrameScheduler for AnimationFrameScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let slot = self.callback.borrow();
        let Some(callback) = slot.as_ref() else {
            warn!("frame requested before the frame callback was installed");
            return None;
        };
        match self.window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => Some(FrameHandle::new(id as u64)),
            Err(e) => {
                warn!("requestAnimationFrame failed: {e:?}");
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Err(e) = self.window.cancel_animation_frame(handle.id() as i32) {
            warn!("cancelAnimationFrame failed: {e:?}");
        }
    }
}

/// `Math.random`.
pub struct MathRandom;

impl RandomSource for MathRandom {
    fn next_f64(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

/// A bolt bound to an SVG element, controlled from JavaScript.
///
/// The SVG must contain at least one `<path>`; all of them are drawn with the same bolt.
#[wasm_bindgen]
pub struct VoltageControl {
    animator: Rc<RefCell<BoltAnimator>>,
}

#[wasm_bindgen]
impl VoltageControl {
    #[wasm_bindgen(constructor)]
    pub fn new(svg: Element, container: HtmlElement) -> Result<VoltageControl, JsValue> {
        install_panic_hook();
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let target = SvgPathTarget::from_svg(&svg).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let callback: FrameCallback = Default::default();
        let scheduler = AnimationFrameScheduler { window, callback: callback.clone() };

        let mut animator = BoltAnimator::new(Box::new(target), Box::new(HtmlContainer(container)), Box::new(scheduler))
            .with_random(Box::new(MathRandom));
        animator.draw_rest_path();
        let animator = Rc::new(RefCell::new(animator));

        let weak = Rc::downgrade(&animator);
        *callback.borrow_mut() = Some(Closure::<dyn FnMut()>::new(move || {
            let Some(animator) = weak.upgrade() else { return };
            if let Ok(mut animator) = animator.try_borrow_mut() {
                animator.on_frame();
            }
        }));
        Ok(Self { animator })
    }

    pub fn start(&self) {
        self.animator.borrow_mut().start();
    }

    pub fn stop(&self) {
        self.animator.borrow_mut().stop();
    }

    pub fn resize(&self) {
        self.animator.borrow_mut().resize();
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.animator.borrow().is_running()
    }

    #[wasm_bindgen(js_name = setHorizontal)]
    pub fn set_horizontal(&self, horizontal: bool) {
        self.animator.borrow_mut().set_orientation(Orientation::from_horizontal(horizontal));
    }

    #[wasm_bindgen(js_name = setBranchPoints)]
    pub fn set_branch_points(&self, branch_points: u32) {
        self.animator.borrow_mut().set_branch_points(branch_points);
    }

    #[wasm_bindgen(js_name = setSpread)]
    pub fn set_spread(&self, percent: f64) {
        self.animator.borrow_mut().set_spread_percent(percent);
    }
}

impl Drop for VoltageControl {
    fn drop(&mut self) {
        // the frame callback goes away with the animator, so nothing may be left scheduled
        if let Ok(mut animator) = self.animator.try_borrow_mut() {
            animator.stop();
        }
    }
}
