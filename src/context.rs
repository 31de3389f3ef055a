//! Ambient visual mode for a subtree of components.
//!
//! A [`ModeContext`] is handed from a page session to the closures that
//! build its children. Providing a mode creates a new scope that shadows
//! the outer one; the outer handle keeps reading its own value, so
//! siblings and ancestors never observe a nested override.

use std::rc::Rc;

use gpui::IntoElement;
use mixologist_theme::{PaletteResolution, VisualMode};

#[derive(Debug)]
struct ModeScope {
    mode: VisualMode,
    palette: PaletteResolution,
    depth: usize,
}

/// Read handle for the nearest enclosing mode declaration.
///
/// Cloning is cheap and shares the scope by reference. A context with no
/// provider reads [`VisualMode::Default`] and the default palette.
#[derive(Debug, Clone, Default)]
pub struct ModeContext {
    scope: Option<Rc<ModeScope>>,
}

impl ModeContext {
    pub fn root() -> Self {
        Self::default()
    }

    /// Declares `mode` for everything built from the returned handle.
    pub fn provide(&self, mode: VisualMode) -> ModeContext {
        ModeContext {
            scope: Some(Rc::new(ModeScope {
                mode,
                palette: PaletteResolution::for_mode(mode),
                depth: self.depth() + 1,
            })),
        }
    }

    /// Runs `subtree` with `mode` provided, returning whatever it builds.
    pub fn scoped<R>(&self, mode: VisualMode, subtree: impl FnOnce(&ModeContext) -> R) -> R {
        subtree(&self.provide(mode))
    }

    pub fn mode(&self) -> VisualMode {
        self.scope
            .as_ref()
            .map(|scope| scope.mode)
            .unwrap_or_default()
    }

    pub fn palette(&self) -> &PaletteResolution {
        match &self.scope {
            Some(scope) => &scope.palette,
            None => &PaletteResolution::DEFAULT,
        }
    }

    /// Number of providers between this handle and the root.
    pub fn depth(&self) -> usize {
        self.scope.as_ref().map(|scope| scope.depth).unwrap_or(0)
    }

    /// Whether both handles read the same declaration.
    pub fn same_scope(&self, other: &ModeContext) -> bool {
        match (&self.scope, &other.scope) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

/// A component that reads its colours from a [`ModeContext`].
///
/// Containers that publish a mode only accept children implementing this,
/// so nothing placed inside them can miss the declaration.
pub trait ModeScoped: IntoElement + 'static {
    fn with_scope(self, scope: &ModeContext) -> Self;
}
