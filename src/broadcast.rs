//! Publish/subscribe on a single object.
//!
//! A [`CallbackSlot`] is an ordered list of shared callbacks. Invoking it calls
//! every subscriber with the same argument, in subscription order, and hands back
//! the value returned by the *last* one. Earlier return values are dropped; use
//! [`CallbackSlot::invoke_all`] when all of them are needed.
//!
//! Invoking an empty slot is not an error for [`CallbackSlot::invoke`]: it is a
//! no-op that yields `None`. [`CallbackSlot::try_invoke`] turns the same case
//! into [`SnippetError::NoSubscribers`].

use std::fmt;
use std::rc::Rc;

use crate::error::{Result, SnippetError};

/// A shared callback reference. Clones point at the same callback, and two
/// handlers are equal only when they share an allocation.
pub struct Handler<A: ?Sized, R> {
    callback: Rc<dyn Fn(&A) -> R>,
}

impl<A: ?Sized + 'static, R: 'static> Handler<A, R> {
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&A) -> R + 'static,
    {
        Handler {
            callback: Rc::new(callback),
        }
    }

    pub fn call(&self, arg: &A) -> R {
        (self.callback)(arg)
    }
}

impl<A: ?Sized, R> Handler<A, R> {
    pub fn same_as(&self, other: &Handler<A, R>) -> bool {
        Rc::ptr_eq(&self.callback, &other.callback)
    }
}

impl<A: ?Sized, R> Clone for Handler<A, R> {
    fn clone(&self) -> Self {
        Handler {
            callback: Rc::clone(&self.callback),
        }
    }
}

impl<A: ?Sized, R> PartialEq for Handler<A, R> {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl<A: ?Sized, R> fmt::Debug for Handler<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handler({:p})", Rc::as_ptr(&self.callback) as *const ())
    }
}

pub struct CallbackSlot<A: ?Sized, R> {
    name: String,
    handlers: Vec<Handler<A, R>>,
}

impl<A: ?Sized + 'static, R: 'static> CallbackSlot<A, R> {
    pub fn new() -> Self {
        Self::named("callback")
    }

    pub fn named(name: impl Into<String>) -> Self {
        CallbackSlot {
            name: name.into(),
            handlers: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Wraps `callback` and appends it. Keep the returned handler to
    /// unsubscribe later.
    pub fn subscribe<F>(&mut self, callback: F) -> Handler<A, R>
    where
        F: Fn(&A) -> R + 'static,
    {
        let handler = Handler::new(callback);
        self.subscribe_handler(handler.clone());
        handler
    }

    /// Appends an existing handler. The same handler may be subscribed more
    /// than once and will then be called once per subscription.
    pub fn subscribe_handler(&mut self, handler: Handler<A, R>) {
        self.handlers.push(handler);
        log::debug!(
            "{}: subscribed handler, {} total",
            self.name,
            self.handlers.len()
        );
    }

    /// Removes the most recent subscription of `handler`. Returns `false` if it
    /// was not subscribed.
    pub fn unsubscribe(&mut self, handler: &Handler<A, R>) -> bool {
        match self.handlers.iter().rposition(|h| h.same_as(handler)) {
            Some(index) => {
                self.handlers.remove(index);
                log::debug!(
                    "{}: unsubscribed handler, {} left",
                    self.name,
                    self.handlers.len()
                );
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Calls every subscriber in order and returns the last result, or `None`
    /// when nobody is subscribed.
    pub fn invoke(&self, arg: &A) -> Option<R> {
        log::trace!("{}: invoking {} handler(s)", self.name, self.handlers.len());
        self.handlers
            .iter()
            .fold(None, |_, handler| Some(handler.call(arg)))
    }

    pub fn invoke_or_default(&self, arg: &A) -> R
    where
        R: Default,
    {
        self.invoke(arg).unwrap_or_default()
    }

    pub fn try_invoke(&self, arg: &A) -> Result<R> {
        self.invoke(arg)
            .ok_or_else(|| SnippetError::no_subscribers(&self.name))
    }

    pub fn invoke_all(&self, arg: &A) -> Vec<R> {
        self.handlers.iter().map(|handler| handler.call(arg)).collect()
    }
}

impl<A: ?Sized + 'static, R: 'static> Default for CallbackSlot<A, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ?Sized, R> fmt::Debug for CallbackSlot<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackSlot")
            .field("name", &self.name)
            .field("subscribers", &self.handlers.len())
            .finish()
    }
}

/* ============================================================
 * Greeter: an owner that wires its own slot on construction
 * ============================================================
 */

pub fn welcome_user(username: &str) -> String {
    format!("hello, {username}")
}

pub fn welcome_user2(username: &str) -> String {
    format!("hello 2, {username}")
}

#[derive(Debug)]
pub struct Greeter {
    welcome: CallbackSlot<str, String>,
}

impl Greeter {
    pub fn new() -> Self {
        let mut welcome = CallbackSlot::named("welcome");
        welcome.subscribe(welcome_user);
        Greeter { welcome }
    }

    pub fn on_welcome(&mut self) -> &mut CallbackSlot<str, String> {
        &mut self.welcome
    }

    pub fn raise(&self, username: &str) -> Option<String> {
        self.welcome.invoke(username)
    }

    pub fn try_raise(&self, username: &str) -> Result<String> {
        self.welcome.try_invoke(username)
    }
}

impl Default for Greeter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn recorder(
        log: &Rc<RefCell<Vec<&'static str>>>,
        tag: &'static str,
    ) -> impl Fn(&str) -> String + 'static {
        let log = Rc::clone(log);
        move |input: &str| {
            log.borrow_mut().push(tag);
            format!("{tag}:{input}")
        }
    }

    #[test]
    fn test_greeter_literal_scenario() {
        let greeter = Greeter::new();
        assert_eq!(greeter.raise("the one"), Some("hello, the one".to_string()));
    }

    #[test]
    fn test_try_raise_matches_raise() {
        let greeter = Greeter::new();
        assert_eq!(greeter.try_raise("the one").unwrap(), "hello, the one");
        assert_eq!(greeter.raise("the one").as_deref(), Some("hello, the one"));
    }

    #[test]
    fn test_last_subscriber_wins() {
        let mut slot: CallbackSlot<str, String> = CallbackSlot::new();
        slot.subscribe(welcome_user);
        assert_eq!(slot.invoke("x"), Some(welcome_user("x")));

        slot.subscribe(welcome_user2);
        assert_eq!(slot.invoke("x"), Some("hello 2, x".to_string()));
    }

    #[test]
    fn test_subscribers_run_in_order() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut slot: CallbackSlot<str, String> = CallbackSlot::new();
        slot.subscribe(recorder(&calls, "first"));
        slot.subscribe(recorder(&calls, "second"));

        let result = slot.invoke("go");

        assert_eq!(result.as_deref(), Some("second:go"));
        assert_eq!(*calls.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_invoke_all_keeps_every_result() {
        let mut greeter = Greeter::new();
        greeter.on_welcome().subscribe(welcome_user2);

        let results = greeter.on_welcome().invoke_all("bob");
        assert_eq!(results, vec!["hello, bob", "hello 2, bob"]);
    }

    #[test]
    fn test_empty_slot_policies() {
        let slot: CallbackSlot<str, String> = CallbackSlot::named("empty");
        assert_eq!(slot.name(), "empty");
        assert!(slot.is_empty());
        assert_eq!(slot.invoke("x"), None);
        assert_eq!(slot.invoke_or_default("x"), "");
        assert!(slot.invoke_all("x").is_empty());

        match slot.try_invoke("x") {
            Err(SnippetError::NoSubscribers { slot: name }) => assert_eq!(name, slot.name()),
            other => panic!("expected NoSubscribers, got {other:?}"),
        }
    }

    #[test]
    fn test_unsubscribe_by_reference() {
        let mut greeter = Greeter::new();
        let extra = greeter.on_welcome().subscribe(welcome_user2);
        assert_eq!(greeter.on_welcome().len(), 2);

        assert!(greeter.on_welcome().unsubscribe(&extra));
        assert_eq!(greeter.raise("amy"), Some("hello, amy".to_string()));

        // already gone
        assert!(!greeter.on_welcome().unsubscribe(&extra));
    }

    #[test]
    fn test_unsubscribe_removes_last_occurrence() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut slot: CallbackSlot<str, String> = CallbackSlot::new();
        let a = Handler::<str, String>::new(recorder(&calls, "a"));
        let b = slot.subscribe(recorder(&calls, "b"));
        slot.subscribe_handler(a.clone());
        slot.subscribe_handler(b.clone());
        slot.subscribe_handler(a.clone());

        assert!(slot.unsubscribe(&a));
        slot.invoke("z");

        assert_eq!(*calls.borrow(), vec!["b", "a", "b"]);
    }

    #[test]
    fn test_unsubscribe_unknown_handler_is_noop() {
        let mut slot: CallbackSlot<str, String> = CallbackSlot::new();
        slot.subscribe(welcome_user);
        let stranger = Handler::<str, String>::new(welcome_user);

        assert!(!slot.unsubscribe(&stranger));
        assert_eq!(slot.len(), 1);
    }

    #[test]
    fn test_handler_identity() {
        let a = Handler::<str, String>::new(welcome_user);
        let b = Handler::<str, String>::new(welcome_user);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
}
