use crate::constants::*;
use crate::dom;
use folio_core::constants::{NOTIFICATION_ENTER_DELAY_MS, NOTIFICATION_EXIT_MS, NOTIFICATION_LIFETIME_MS};
use folio_core::{Notification, NotificationId, NotificationKind, NotificationSlot, Notifier};
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Banner currently attached to the page, with the listeners it owns.
struct Mounted {
    id: NotificationId,
    element: web::HtmlElement,
    _listeners: Vec<Closure<dyn FnMut()>>,
}

struct Inner {
    document: web::Document,
    slot: RefCell<NotificationSlot>,
    mounted: RefCell<Option<Mounted>>,
}

/// Shows one banner at a time in the top-right corner.
///
/// Timers are fire-and-forget; each one checks its banner id against the
/// slot, so timers belonging to an evicted banner do nothing.
#[derive(Clone)]
pub struct NotificationPresenter {
    inner: Rc<Inner>,
}

impl NotificationPresenter {
    pub fn new(document: web::Document) -> Self {
        Self {
            inner: Rc::new(Inner {
                document,
                slot: RefCell::new(NotificationSlot::new()),
                mounted: RefCell::new(None),
            }),
        }
    }

    pub fn show(&self, message: &str, kind: NotificationKind) {
        if let Some(prev) = self.inner.slot.borrow().current() {
            log::debug!("[notify] replacing {} banner", prev.kind.as_str());
        }
        let (id, evicted) = self.inner.slot.borrow_mut().show(Notification {
            message: message.to_owned(),
            kind,
        });
        if evicted.is_some() {
            self.inner.detach_now();
        }

        let mounted = match self.inner.build(id, message, kind) {
            Ok(m) => m,
            Err(e) => {
                log::error!("[notify] could not build banner: {:?}", e);
                return;
            }
        };
        log::debug!("[notify] {} '{}'", kind.as_str(), message);
        *self.inner.mounted.borrow_mut() = Some(mounted);

        let weak = Rc::downgrade(&self.inner);
        Timeout::new(NOTIFICATION_ENTER_DELAY_MS, move || {
            if let Some(inner) = weak.upgrade() {
                inner.slide_in(id);
            }
        })
        .forget();

        let weak = Rc::downgrade(&self.inner);
        Timeout::new(NOTIFICATION_LIFETIME_MS, move || {
            if let Some(inner) = weak.upgrade() {
                Inner::dismiss(&inner, id);
            }
        })
        .forget();
    }
}

impl Notifier for NotificationPresenter {
    fn notify(&self, message: &str, kind: NotificationKind) {
        self.show(message, kind);
    }
}

impl Inner {
    fn build(
        self: &Rc<Self>,
        id: NotificationId,
        message: &str,
        kind: NotificationKind,
    ) -> anyhow::Result<Mounted> {
        let element: web::HtmlElement = self.element("div")?;
        element.set_class_name(&kind.class_name());
        element
            .style()
            .set_css_text(&format!("{} {}", NOTIFICATION_BASE_CSS, kind.color_css()));

        let content: web::HtmlElement = self.element("div")?;
        content.set_class_name(NOTIFICATION_CONTENT_CLASS);
        content.style().set_css_text(NOTIFICATION_CONTENT_CSS);

        let icon: web::Element = self.element("i")?;
        icon.set_class_name(&icon_class(kind.icon()));

        // Plain text node; the message never goes through the HTML parser.
        let text: web::Element = self.element("span")?;
        text.set_text_content(Some(message));

        let close: web::HtmlElement = self.element("button")?;
        close.set_class_name(NOTIFICATION_CLOSE_CLASS);
        close.set_attribute("type", "button").map_err(dom::js_err)?;
        close.set_attribute("aria-label", "Close").map_err(dom::js_err)?;
        close.style().set_css_text(NOTIFICATION_CLOSE_CSS);
        let close_icon: web::Element = self.element("i")?;
        close_icon.set_class_name(&icon_class(CLOSE_ICON));
        close.append_child(&close_icon).map_err(dom::js_err)?;

        for child in [&icon, &text, &*close] {
            content.append_child(child).map_err(dom::js_err)?;
        }
        element.append_child(&content).map_err(dom::js_err)?;

        let weak: Weak<Inner> = Rc::downgrade(self);
        let on_close = dom::listen_owned(&close, "click", move || {
            if let Some(inner) = weak.upgrade() {
                Inner::dismiss(&inner, id);
            }
        });
        let hover_target = close.clone();
        let on_enter = dom::listen_owned(&close, "mouseenter", move || {
            dom::set_style(&hover_target, "opacity", CLOSE_OPACITY_HOVER);
        });
        let hover_target = close.clone();
        let on_leave = dom::listen_owned(&close, "mouseleave", move || {
            dom::set_style(&hover_target, "opacity", CLOSE_OPACITY_IDLE);
        });

        let body = self
            .document
            .body()
            .ok_or_else(|| anyhow::anyhow!("document has no body"))?;
        body.append_child(&element).map_err(dom::js_err)?;

        Ok(Mounted {
            id,
            element,
            _listeners: vec![on_close, on_enter, on_leave],
        })
    }

    fn element<T: JsCast>(&self, tag: &str) -> anyhow::Result<T> {
        self.document
            .create_element(tag)
            .map_err(dom::js_err)?
            .dyn_into::<T>()
            .map_err(|_| anyhow::anyhow!("<{}> has unexpected type", tag))
    }

    fn slide_in(&self, id: NotificationId) {
        if !self.slot.borrow_mut().entered(id) {
            return;
        }
        if let Some(m) = self.mounted.borrow().as_ref().filter(|m| m.id == id) {
            dom::set_style(&m.element, "transform", SLIDE_IN);
        }
    }

    /// Slide out, then detach once the transition has had time to finish.
    fn dismiss(this: &Rc<Self>, id: NotificationId) {
        let phase = this.slot.borrow().phase();
        if !this.slot.borrow_mut().dismiss(id) {
            return;
        }
        log::debug!("[notify] dismissing from {:?}", phase);
        if let Some(m) = this.mounted.borrow().as_ref().filter(|m| m.id == id) {
            dom::set_style(&m.element, "transform", SLIDE_OUT);
        }
        let weak = Rc::downgrade(this);
        Timeout::new(NOTIFICATION_EXIT_MS, move || {
            if let Some(inner) = weak.upgrade() {
                if inner.slot.borrow_mut().detached(id) {
                    inner.detach_now();
                }
            }
        })
        .forget();
    }

    /// Remove whatever banner is mounted, without any transition.
    fn detach_now(&self) {
        if let Some(m) = self.mounted.borrow_mut().take() {
            m.element.remove();
        }
    }
}
