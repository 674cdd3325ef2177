//! End-to-end flows through the controls, driven the way a rendering host
//! would drive them: feed an input event, read the accessors back, render.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use corbel_controls::{
    OptionList, PageRangeStrategy, Pagination, SelectBox, SelectOption,
};
use corbel_core::{Key, KeyEvent, PointerChannel, PointerDownEvent};

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn languages() -> OptionList {
    OptionList::new(vec![
        SelectOption::new("kr", "Korean"),
        SelectOption::new("en", "English"),
        SelectOption::new("jp", "Japanese").with_disabled(true),
        SelectOption::new("de", "German"),
    ])
}

#[test]
fn pagination_starts_at_the_first_window() {
    init_tracing();
    let pager = Pagination::new(10).with_window_size(5);

    assert_eq!(pager.pages(), vec![1, 2, 3, 4, 5]);
    assert!(!pager.can_step_backward());
    assert!(pager.can_step_forward());
}

#[test]
fn pagination_last_group_is_short_and_final() {
    init_tracing();
    let mut pager = Pagination::new(23)
        .with_window_size(5)
        .with_strategy(PageRangeStrategy::Grouped);

    pager.set_position(22);
    assert_eq!(pager.pages(), vec![21, 22, 23]);
    assert!(pager.can_step_backward());
    assert!(!pager.can_step_forward());
}

#[test]
fn pagination_walks_the_whole_domain_by_groups() {
    init_tracing();
    let mut pager = Pagination::new(12)
        .with_window_size(5)
        .with_strategy(PageRangeStrategy::Grouped);

    let visited = Arc::new(Mutex::new(Vec::new()));
    let visited_clone = visited.clone();
    pager.position_changed.connect(move |&page| {
        visited_clone.lock().push(page);
    });

    while pager.can_step_forward() {
        pager.step_forward();
    }
    // 1..=5 -> 6, 6..=10 -> 11, 11..=12 is the last group.
    assert_eq!(*visited.lock(), vec![6, 11]);
    assert_eq!(pager.pages(), vec![11, 12]);

    while pager.can_step_backward() {
        pager.step_backward();
    }
    // Backward steps land on the previous group's last page.
    assert_eq!(*visited.lock(), vec![6, 11, 10, 5]);
    assert_eq!(pager.pages(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn pagination_hides_step_controls_for_a_single_page() {
    init_tracing();
    assert!(!Pagination::new(1).step_controls_visible());
    assert!(Pagination::new(2).step_controls_visible());
}

#[test]
fn select_box_rejects_disabled_then_accepts_enabled() {
    init_tracing();
    let channel = Arc::new(PointerChannel::new());
    let mut select = SelectBox::new(languages())
        .with_placeholder("Choose a language")
        .with_channel(channel);

    let selections = Arc::new(Mutex::new(Vec::new()));
    let selections_clone = selections.clone();
    select
        .signals()
        .selection_changed
        .connect(move |(id, option): &(String, SelectOption)| {
            selections_clone.lock().push((id.clone(), option.label.clone()));
        });

    select.activate();
    select.select("jp"); // disabled: rejected, stays open
    assert!(select.is_open());
    assert_eq!(select.display_text(), "Choose a language");

    select.select("en");
    assert!(!select.is_open());
    assert_eq!(select.display_text(), "English");
    assert_eq!(
        *selections.lock(),
        vec![("en".to_string(), "English".to_string())]
    );
}

#[test]
fn outside_press_closes_without_selecting() {
    init_tracing();
    let channel = Arc::new(PointerChannel::new());
    let mut select = SelectBox::new(languages()).with_channel(channel.clone());

    let closed = Arc::new(AtomicUsize::new(0));
    let closed_clone = closed.clone();
    select.signals().closed.connect(move |_| {
        closed_clone.fetch_add(1, Ordering::SeqCst);
    });
    let selected = Arc::new(AtomicUsize::new(0));
    let selected_clone = selected.clone();
    select.signals().selection_changed.connect(move |_| {
        selected_clone.fetch_add(1, Ordering::SeqCst);
    });

    select.activate();
    channel.dispatch(&PointerDownEvent::outside());

    assert!(!select.is_open());
    assert_eq!(closed.load(Ordering::SeqCst), 1);
    assert_eq!(selected.load(Ordering::SeqCst), 0);
    assert_eq!(select.selected_id(), None);

    // The watch went with the popup: further presses are not observed.
    channel.dispatch(&PointerDownEvent::outside());
    assert_eq!(closed.load(Ordering::SeqCst), 1);
}

#[test]
fn select_box_keyboard_only_session() {
    init_tracing();
    let channel = Arc::new(PointerChannel::new());
    let mut select = SelectBox::new(languages()).with_channel(channel);

    // ArrowDown opens and highlights the first enabled option.
    assert!(select.handle_key(&KeyEvent::plain(Key::ArrowDown)));
    assert!(select.is_open());
    assert_eq!(select.highlighted(), Some(0));

    // Walk past the disabled entry to "de" and commit.
    select.handle_key(&KeyEvent::plain(Key::ArrowDown));
    select.handle_key(&KeyEvent::plain(Key::ArrowDown));
    assert_eq!(select.highlighted(), Some(3));
    select.select_highlighted();

    assert!(!select.is_open());
    assert_eq!(select.selected_id(), Some("de"));
    assert_eq!(select.display_text(), "German");

    // Escape on the closed control is not consumed.
    assert!(!select.handle_key(&KeyEvent::plain(Key::Escape)));
}

#[test]
fn two_controls_share_one_channel_without_crosstalk() {
    init_tracing();
    let channel = Arc::new(PointerChannel::new());
    let mut language = SelectBox::new(languages()).with_channel(channel.clone());
    let mut country = SelectBox::new(
        OptionList::new(vec![
            SelectOption::new("kr", "Korea"),
            SelectOption::new("de", "Germany"),
        ]),
    )
    .with_channel(channel.clone());

    language.activate();
    country.activate();

    // Pressing inside the country popup dismisses only the language popup.
    channel.dispatch(&PointerDownEvent::inside(country.surface()));
    assert!(!language.is_open());
    assert!(country.is_open());

    country.select("de");
    assert_eq!(country.display_text(), "Germany");
    assert_eq!(channel.watch_count(), 0);
}

#[test]
fn controlled_select_mirrors_the_host_value() {
    init_tracing();
    let channel = Arc::new(PointerChannel::new());
    let mut select = SelectBox::controlled(languages()).with_channel(channel);

    // The host stores the value wherever it likes and echoes it back.
    let store = Arc::new(Mutex::new(None::<String>));
    let store_clone = store.clone();
    select
        .signals()
        .selection_changed
        .connect(move |(id, _): &(String, SelectOption)| {
            *store_clone.lock() = Some(id.clone());
        });

    select.activate();
    select.select("kr");
    assert_eq!(select.selected_id(), None); // host-owned until synced

    let value = store.lock().clone();
    select.sync_value(value.as_deref());
    assert_eq!(select.selected_id(), Some("kr"));
    assert_eq!(select.display_text(), "Korean");
}
