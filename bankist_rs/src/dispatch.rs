//! Delegated event target classification.
//!
//! Containers listen once for their children. When an event arrives the
//! container's [`DispatchTable`] decides which kind of child, if any, the
//! event belongs to.

use crate::selectors;

/// Minimal view of a DOM element needed to classify event targets.
pub trait DomNode: Sized {
    /// Whether the element itself carries `class`.
    fn has_class(&self, class: &str) -> bool;

    /// Nearest ancestor-or-self matching a single-class selector.
    fn closest(&self, selector: &str) -> Option<Self>;
}

/// Kinds of delegated targets on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// An in-page navigation link.
    NavLink,
    /// An operations tab button.
    Tab,
    /// A carousel indicator dot.
    SlideIndicator,
}

/// How a capability is recognized from the raw event target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// The target itself must carry the class.
    Target(&'static str),
    /// The target or one of its ancestors must match the selector.
    Closest(&'static str),
}

impl Capability {
    /// Matching rule for this capability.
    pub fn matcher(self) -> Matcher {
        match self {
            Capability::NavLink => Matcher::Target(selectors::NAV_LINK),
            // Tab buttons wrap a number span; clicks land on either.
            Capability::Tab => Matcher::Closest(selectors::TAB_SELECTOR),
            Capability::SlideIndicator => Matcher::Target(selectors::DOT),
        }
    }
}

/// A target that matched one of the table's capabilities.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<N> {
    /// Which route matched.
    pub capability: Capability,
    /// The element the capability applies to.
    pub element: N,
}

/// Ordered list of capabilities a container reacts to.
#[derive(Debug, Clone, Default)]
pub struct DispatchTable {
    routes: Vec<Capability>,
}

impl DispatchTable {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a route; earlier routes win.
    pub fn route(mut self, capability: Capability) -> Self {
        self.routes.push(capability);
        self
    }

    /// Classifies an event target. `None` means the event is ignored.
    pub fn resolve<N: DomNode>(&self, target: N) -> Option<Resolved<N>> {
        for &capability in &self.routes {
            match capability.matcher() {
                Matcher::Target(class) => {
                    if target.has_class(class) {
                        return Some(Resolved {
                            capability,
                            element: target,
                        });
                    }
                }
                Matcher::Closest(selector) => {
                    if let Some(element) = target.closest(selector) {
                        return Some(Resolved {
                            capability,
                            element,
                        });
                    }
                }
            }
        }
        None
    }
}
