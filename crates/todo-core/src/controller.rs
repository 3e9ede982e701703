//! Todo Controller
//!
//! Async flows for every user intent. Each flow marks its request in flight,
//! awaits the API, then applies the result and clears the in-flight mark in
//! one state transition. Failures all go through [`TodoController::report`].

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::api::TodoApi;
use crate::domain::{TodoError, TodoId};
use crate::state::{ErrorTicket, Operation, TodoState};

/// Somewhere the single state record lives
pub trait StateCell {
    /// Run `f` against the state. `None` if the state is gone.
    fn update<R>(&self, f: impl FnOnce(&mut TodoState) -> R) -> Option<R>;
}

impl StateCell for Rc<RefCell<TodoState>> {
    fn update<R>(&self, f: impl FnOnce(&mut TodoState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Schedules the automatic clearing of an error
pub trait ErrorTimer {
    /// Expire `ticket` once `after` has elapsed
    fn schedule_expiry(&self, ticket: ErrorTicket, after: Duration);
}

#[derive(Debug, Clone)]
pub struct TodoController<A, S, T> {
    api: A,
    state: S,
    timer: T,
    error_timeout: Duration,
}

impl<A, S, T> TodoController<A, S, T>
where
    A: TodoApi,
    S: StateCell,
    T: ErrorTimer,
{
    pub fn new(api: A, state: S, timer: T, error_timeout: Duration) -> Self {
        Self {
            api,
            state,
            timer,
            error_timeout,
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn set_input(&self, text: String) {
        self.state.update(|s| s.set_input(text));
    }

    pub fn set_search_input(&self, text: String) {
        self.state.update(|s| s.set_search_input(text));
    }

    /// Initial load: replace the list wholesale with the API's
    pub async fn load(&self) {
        self.state.update(|s| s.begin(Operation::FetchAll));
        let result = self.api.fetch_all().await;
        let outcome = self.state.update(|s| {
            s.end(Operation::FetchAll);
            result.map(|todos| {
                log::info!("loaded {} todos", todos.len());
                s.replace_todos(todos);
            })
        });
        self.settle(Operation::FetchAll, outcome);
    }

    /// Submit the add field. The field is emptied before the request goes out.
    pub async fn submit_add(&self) {
        match self.state.update(|s| s.take_add_title()) {
            Some(Ok(title)) => self.add(title).await,
            Some(Err(err)) => self.report(err),
            None => {}
        }
    }

    /// Create a todo and put it first on success
    pub async fn add(&self, title: String) {
        if title.is_empty() {
            self.report(TodoError::EmptyInput);
            return;
        }

        self.state.update(|s| s.begin(Operation::Add));
        let result = self.api.add(&title).await;
        let outcome = self.state.update(|s| {
            s.end(Operation::Add);
            result.map(|todo| {
                log::debug!("added todo {}", todo.id);
                s.prepend_todo(todo);
            })
        });
        self.settle(Operation::Add, outcome);
    }

    /// Remove a todo once the API confirms
    pub async fn remove(&self, id: TodoId) {
        self.state.update(|s| s.begin(Operation::Remove));
        let result = self.api.remove(&id).await;
        let outcome = self.state.update(|s| {
            s.end(Operation::Remove);
            result.map(|()| {
                if !s.remove_todo(&id) {
                    log::debug!("removed todo {id} was no longer listed");
                }
            })
        });
        self.settle(Operation::Remove, outcome);
    }

    /// Flip completion. The API answers with the whole list, which replaces
    /// ours, annotations included.
    pub async fn toggle(&self, id: TodoId) {
        self.state.update(|s| s.begin(Operation::Toggle));
        let result = self.api.toggle_complete(&id).await;
        let outcome = self.state.update(|s| {
            s.end(Operation::Toggle);
            result.map(|todos| {
                log::debug!("toggled todo {id}, {} todos returned", todos.len());
                s.replace_todos(todos);
            })
        });
        self.settle(Operation::Toggle, outcome);
    }

    /// Submit the search field
    pub fn submit_search(&self) {
        if let Some(term) = self.state.update(|s| s.take_search_term()) {
            self.search(&term);
        }
    }

    /// Annotate matching titles locally. No request is made.
    pub fn search(&self, term: &str) {
        match self.state.update(|s| s.apply_search(term)) {
            Some(Ok(matched)) => log::debug!("search {term:?} matched {matched} todos"),
            Some(Err(err)) => self.report(err),
            None => {}
        }
    }

    pub fn expire_error(&self, ticket: ErrorTicket) {
        self.state.update(|s| s.expire_error(ticket));
    }

    fn settle(&self, op: Operation, outcome: Option<Result<(), TodoError>>) {
        match outcome {
            Some(Ok(())) => {}
            Some(Err(err)) => {
                log::warn!("{} failed: {err}", op.as_str());
                self.report(err);
            }
            None => log::debug!("{} finished after state was dropped", op.as_str()),
        }
    }

    /// Show `err` on the banner and schedule its removal
    fn report(&self, err: TodoError) {
        if let Some(ticket) = self.state.update(|s| s.fail(&err)) {
            self.timer.schedule_expiry(ticket, self.error_timeout);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Todo, TodoResult};
    use async_trait::async_trait;
    use std::collections::VecDeque;

    /// Scripted API: every call pops the next canned response
    #[derive(Clone, Default)]
    struct MockApi {
        calls: Rc<RefCell<Vec<String>>>,
        lists: Rc<RefCell<VecDeque<TodoResult<Vec<Todo>>>>>,
        added: Rc<RefCell<VecDeque<TodoResult<Todo>>>>,
        removed: Rc<RefCell<VecDeque<TodoResult<()>>>>,
    }

    impl MockApi {
        fn push_list(&self, result: TodoResult<Vec<Todo>>) {
            self.lists.borrow_mut().push_back(result);
        }

        fn push_added(&self, result: TodoResult<Todo>) {
            self.added.borrow_mut().push_back(result);
        }

        fn push_removed(&self, result: TodoResult<()>) {
            self.removed.borrow_mut().push_back(result);
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        fn record(&self, call: String) {
            self.calls.borrow_mut().push(call);
        }
    }

    fn exhausted<T>() -> TodoResult<T> {
        Err(TodoError::Network("no scripted response".to_string()))
    }

    #[async_trait(?Send)]
    impl TodoApi for MockApi {
        async fn fetch_all(&self) -> TodoResult<Vec<Todo>> {
            self.record("fetch_all".to_string());
            self.lists.borrow_mut().pop_front().unwrap_or_else(exhausted)
        }

        async fn add(&self, title: &str) -> TodoResult<Todo> {
            self.record(format!("add {title}"));
            self.added.borrow_mut().pop_front().unwrap_or_else(exhausted)
        }

        async fn remove(&self, id: &TodoId) -> TodoResult<()> {
            self.record(format!("remove {id}"));
            self.removed.borrow_mut().pop_front().unwrap_or_else(exhausted)
        }

        async fn toggle_complete(&self, id: &TodoId) -> TodoResult<Vec<Todo>> {
            self.record(format!("toggle {id}"));
            self.lists.borrow_mut().pop_front().unwrap_or_else(exhausted)
        }
    }

    #[derive(Clone, Default)]
    struct RecordingTimer {
        scheduled: Rc<RefCell<Vec<(ErrorTicket, Duration)>>>,
    }

    impl ErrorTimer for RecordingTimer {
        fn schedule_expiry(&self, ticket: ErrorTicket, after: Duration) {
            self.scheduled.borrow_mut().push((ticket, after));
        }
    }

    type Controller = TodoController<MockApi, Rc<RefCell<TodoState>>, RecordingTimer>;

    fn setup() -> (Controller, MockApi, RecordingTimer) {
        let api = MockApi::default();
        let timer = RecordingTimer::default();
        let controller = TodoController::new(
            api.clone(),
            Rc::new(RefCell::new(TodoState::new())),
            timer.clone(),
            Duration::from_millis(6000),
        );
        (controller, api, timer)
    }

    fn snapshot(controller: &Controller) -> TodoState {
        controller.state().borrow().clone()
    }

    fn completed(id: &str, title: &str) -> Todo {
        let mut todo = Todo::new(id, title);
        todo.completed = true;
        todo
    }

    #[tokio::test]
    async fn test_load_replaces_list() {
        let (controller, api, _) = setup();
        api.push_list(Ok(vec![Todo::new("1", "a"), Todo::new("2", "b")]));

        controller.load().await;

        let state = snapshot(&controller);
        assert_eq!(state.todos().len(), 2);
        assert!(!state.is_loading());
        assert_eq!(state.error(), None);
    }

    #[tokio::test]
    async fn test_add_empty_sets_error_without_request() {
        let (controller, api, timer) = setup();

        controller.submit_add().await;

        let state = snapshot(&controller);
        assert_eq!(state.error(), Some("Type something"));
        assert!(state.todos().is_empty());
        assert!(api.calls().is_empty());
        assert_eq!(timer.scheduled.borrow().len(), 1);
        assert_eq!(timer.scheduled.borrow()[0].1, Duration::from_millis(6000));
    }

    #[tokio::test]
    async fn test_add_clears_input_and_prepends() {
        let (controller, api, _) = setup();
        api.push_list(Ok(vec![Todo::new("1", "existing")]));
        api.push_added(Ok(Todo::new("2", "Buy milk")));
        controller.load().await;

        controller.set_input("Buy milk".to_string());
        controller.submit_add().await;

        let state = snapshot(&controller);
        assert_eq!(state.input(), "");
        assert_eq!(state.todos()[0].title, "Buy milk");
        assert_eq!(state.todos()[1].title, "existing");
        assert_eq!(api.calls(), vec!["fetch_all", "add Buy milk"]);
    }

    #[tokio::test]
    async fn test_adds_are_newest_first() {
        let (controller, api, _) = setup();
        for (id, title) in [("1", "one"), ("2", "two"), ("3", "three")] {
            api.push_added(Ok(Todo::new(id, title)));
            controller.add(title.to_string()).await;
        }

        let titles: Vec<_> = snapshot(&controller)
            .todos()
            .iter()
            .map(|t| t.title.clone())
            .collect();
        assert_eq!(titles, vec!["three", "two", "one"]);
    }

    #[tokio::test]
    async fn test_add_failure_keeps_list_and_clears_input() {
        let (controller, api, timer) = setup();
        api.push_added(Err(TodoError::Api("title too long".to_string())));

        controller.set_input("x".repeat(10));
        controller.submit_add().await;

        let state = snapshot(&controller);
        assert_eq!(state.input(), "");
        assert!(state.todos().is_empty());
        assert_eq!(state.error(), Some("title too long"));
        assert!(!state.is_loading());
        assert_eq!(timer.scheduled.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_remove_waits_for_confirmation() {
        let (controller, api, _) = setup();
        api.push_list(Ok(vec![Todo::new("1", "a"), Todo::new("2", "b")]));
        api.push_removed(Err(TodoError::Api("nope".to_string())));
        api.push_removed(Ok(()));
        controller.load().await;

        controller.remove(TodoId::from("1")).await;
        assert_eq!(snapshot(&controller).todos().len(), 2);
        assert_eq!(snapshot(&controller).error(), Some("nope"));

        controller.remove(TodoId::from("1")).await;
        let state = snapshot(&controller);
        assert_eq!(state.todos().len(), 1);
        assert_eq!(state.todos()[0].id, TodoId::from("2"));
    }

    #[tokio::test]
    async fn test_toggle_replaces_whole_list() {
        let (controller, api, _) = setup();
        api.push_list(Ok(vec![
            Todo::new("1", "Hello"),
            Todo::new("2", "World"),
            Todo::new("3", "Extra"),
        ]));
        api.push_list(Ok(vec![completed("1", "Hello"), Todo::new("2", "World")]));
        controller.load().await;
        controller.search("o");
        assert!(snapshot(&controller).todos()[0].is_highlighted());

        controller.toggle(TodoId::from("1")).await;

        let state = snapshot(&controller);
        assert_eq!(state.todos().len(), 2);
        assert!(state.todos()[0].completed);
        assert!(state.todos().iter().all(|t| !t.is_highlighted()));
    }

    #[tokio::test]
    async fn test_toggle_failure_keeps_state() {
        let (controller, api, _) = setup();
        api.push_list(Ok(vec![Todo::new("1", "a")]));
        api.push_list(Err(TodoError::Network("offline".to_string())));
        controller.load().await;

        controller.toggle(TodoId::from("1")).await;

        let state = snapshot(&controller);
        assert_eq!(state.todos(), &[Todo::new("1", "a")]);
        assert_eq!(state.error(), Some("Network error: offline"));
    }

    #[tokio::test]
    async fn test_load_failure_reports_error() {
        let (controller, api, _) = setup();
        api.push_list(Err(TodoError::Api("server down".to_string())));

        controller.load().await;

        let state = snapshot(&controller);
        assert_eq!(state.error(), Some("server down"));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_search_submits_field_and_clears_it() {
        let (controller, _, _) = setup();
        controller
            .state()
            .borrow_mut()
            .replace_todos(vec![Todo::new("1", "banana")]);

        controller.set_search_input("an".to_string());
        controller.submit_search();

        let state = snapshot(&controller);
        assert_eq!(state.search_input(), "");
        assert_eq!(
            state.todos()[0].highlight.as_ref().unwrap().fragments,
            vec!["b", "an", "an", "a"]
        );
    }

    #[test]
    fn test_empty_search_reports_error() {
        let (controller, _, timer) = setup();

        controller.submit_search();

        assert_eq!(snapshot(&controller).error(), Some("Type something"));
        assert_eq!(timer.scheduled.borrow().len(), 1);
    }

    #[test]
    fn test_error_expiry_follows_latest_ticket() {
        let (controller, _, timer) = setup();

        controller.search("");
        controller.submit_search();
        let tickets: Vec<_> = timer.scheduled.borrow().iter().map(|(t, _)| *t).collect();
        assert_eq!(tickets.len(), 2);

        controller.expire_error(tickets[0]);
        assert_eq!(snapshot(&controller).error(), Some("Type something"));

        controller.expire_error(tickets[1]);
        assert_eq!(snapshot(&controller).error(), None);
    }

    #[tokio::test]
    async fn test_loading_flag_during_request() {
        struct SlowApi {
            state: Rc<RefCell<TodoState>>,
            seen_loading: Rc<RefCell<bool>>,
        }

        #[async_trait(?Send)]
        impl TodoApi for SlowApi {
            async fn fetch_all(&self) -> TodoResult<Vec<Todo>> {
                *self.seen_loading.borrow_mut() = self.state.borrow().is_loading();
                Ok(Vec::new())
            }
            async fn add(&self, _title: &str) -> TodoResult<Todo> {
                exhausted()
            }
            async fn remove(&self, _id: &TodoId) -> TodoResult<()> {
                exhausted()
            }
            async fn toggle_complete(&self, _id: &TodoId) -> TodoResult<Vec<Todo>> {
                exhausted()
            }
        }

        let state = Rc::new(RefCell::new(TodoState::new()));
        let seen_loading = Rc::new(RefCell::new(false));
        let api = SlowApi {
            state: state.clone(),
            seen_loading: seen_loading.clone(),
        };
        let controller = TodoController::new(
            api,
            state.clone(),
            RecordingTimer::default(),
            Duration::from_millis(6000),
        );

        controller.load().await;

        assert!(*seen_loading.borrow());
        assert!(!state.borrow().is_loading());
    }

    /// Expires errors on the tokio clock, the way the browser timer does
    #[derive(Clone)]
    struct SleepTimer {
        state: Rc<RefCell<TodoState>>,
    }

    impl ErrorTimer for SleepTimer {
        fn schedule_expiry(&self, ticket: ErrorTicket, after: Duration) {
            let state = self.state.clone();
            tokio::task::spawn_local(async move {
                tokio::time::sleep(after).await;
                state.update(|s| s.expire_error(ticket));
            });
        }
    }

    fn timed_setup() -> (TodoController<MockApi, Rc<RefCell<TodoState>>, SleepTimer>, MockApi) {
        let api = MockApi::default();
        let state = Rc::new(RefCell::new(TodoState::new()));
        let controller = TodoController::new(
            api.clone(),
            state.clone(),
            SleepTimer { state },
            Duration::from_millis(6000),
        );
        (controller, api)
    }

    #[tokio::test(start_paused = true)]
    async fn test_error_clears_once_timeout_elapses() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let (controller, _) = timed_setup();

                controller.submit_add().await;
                assert_eq!(controller.state().borrow().error(), Some("Type something"));

                tokio::time::sleep(Duration::from_millis(5999)).await;
                assert_eq!(controller.state().borrow().error(), Some("Type something"));

                tokio::time::sleep(Duration::from_millis(2)).await;
                assert_eq!(controller.state().borrow().error(), None);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_error_restarts_countdown() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let (controller, api) = timed_setup();
                api.push_added(Err(TodoError::Api("quota exceeded".to_string())));

                controller.submit_add().await;
                tokio::time::sleep(Duration::from_millis(3000)).await;
                controller.add("Buy milk".to_string()).await;

                // First countdown has run out but belonged to the older error
                tokio::time::sleep(Duration::from_millis(3001)).await;
                assert_eq!(controller.state().borrow().error(), Some("quota exceeded"));

                tokio::time::sleep(Duration::from_millis(3000)).await;
                assert_eq!(controller.state().borrow().error(), None);
            })
            .await;
    }
}
