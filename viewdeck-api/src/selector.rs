//! Default-view selectors - priority-ordered rules recommending a view.

use crate::message::HttpMessage;

/// A rule that recommends which view should become active for a subject.
///
/// The controller keeps selectors sorted ascending by [`order`] and, on every
/// subject change, lets the first selector whose predicate matches decide the
/// outcome.
///
/// [`order`]: DefaultViewSelector::order
pub trait DefaultViewSelector {
    /// Name used to remove this selector.
    fn name(&self) -> &str;

    /// Evaluation priority; lower values are consulted first.
    fn order(&self) -> i32;

    /// Whether this rule applies to the given subject.
    fn matches(&self, message: Option<&HttpMessage>) -> bool;

    /// Config name of the view this rule recommends.
    fn view_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ResponseSelector;

    impl DefaultViewSelector for ResponseSelector {
        fn name(&self) -> &str {
            "response"
        }

        fn order(&self) -> i32 {
            10
        }

        fn matches(&self, message: Option<&HttpMessage>) -> bool {
            message.is_some_and(HttpMessage::has_response)
        }

        fn view_name(&self) -> &str {
            "syntax"
        }
    }

    #[test]
    fn selector_is_object_safe() {
        let boxed: Box<dyn DefaultViewSelector> = Box::new(ResponseSelector);
        assert_eq!(boxed.name(), "response");
        assert_eq!(boxed.order(), 10);
        assert_eq!(boxed.view_name(), "syntax");
    }

    #[test]
    fn selector_predicate_sees_absent_subject() {
        let selector = ResponseSelector;
        assert!(!selector.matches(None));

        let msg = HttpMessage::exchange("GET / HTTP/1.1", "", "HTTP/1.1 200 OK", "ok");
        assert!(selector.matches(Some(&msg)));
    }
}
