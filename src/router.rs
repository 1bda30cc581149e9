//! Navigation state: the current route plus the stack of routes visited
//! before it.

use log::debug;

/// Navigation targets. Ids are carried as-is; resolving them against the
/// catalog is the detail view's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    List,
    Details { id: usize },
}

#[derive(Debug, Clone)]
pub struct Router {
    current: Route,
    history: Vec<Route>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Start on the list with nothing to go back to.
    pub fn new() -> Self {
        Self {
            current: Route::List,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    /// Routes that `back` would return to, oldest first.
    pub fn history(&self) -> &[Route] {
        &self.history
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }

    pub fn navigate(&mut self, route: Route) {
        debug!("navigate {:?} -> {:?}", self.current, route);
        let previous = std::mem::replace(&mut self.current, route);
        self.history.push(previous);
    }

    /// Return to the previous route. `None` means the back-stack was empty;
    /// the router is left untouched and the caller decides what leaving the
    /// first screen means.
    pub fn back(&mut self) -> Option<Route> {
        let previous = self.history.pop()?;
        debug!("back {:?} -> {:?}", self.current, previous);
        self.current = previous;
        Some(previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_the_list() {
        let router = Router::new();
        assert_eq!(router.current(), Route::List);
        assert_eq!(router.depth(), 0);
    }

    #[test]
    fn navigate_pushes_the_previous_route() {
        let mut router = Router::new();
        router.navigate(Route::Details { id: 3 });

        assert_eq!(router.current(), Route::Details { id: 3 });
        assert_eq!(router.history(), &[Route::List]);
    }

    #[test]
    fn navigate_does_not_validate_ids() {
        let mut router = Router::new();
        router.navigate(Route::Details { id: 9_999 });
        assert_eq!(router.current(), Route::Details { id: 9_999 });
    }

    #[test]
    fn back_pops_in_reverse_order() {
        let mut router = Router::new();
        router.navigate(Route::Details { id: 1 });
        router.navigate(Route::Details { id: 2 });

        assert_eq!(router.back(), Some(Route::Details { id: 1 }));
        assert_eq!(router.back(), Some(Route::List));
        assert_eq!(router.current(), Route::List);
        assert_eq!(router.depth(), 0);
    }

    #[test]
    fn back_on_empty_stack_keeps_state() {
        let mut router = Router::new();
        assert_eq!(router.back(), None);
        assert_eq!(router.back(), None);
        assert_eq!(router.current(), Route::List);
        assert!(router.history().is_empty());

        router.navigate(Route::Details { id: 0 });
        assert_eq!(router.current(), Route::Details { id: 0 });
        assert_eq!(router.back(), Some(Route::List));
    }
}
