//! Integration tests for the navbar collapse behavior.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use horizon_navbar::prelude::*;

fn setup() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

/// Builds a one-container navbar with scripted widths.
struct Bar {
    tree: NavTree,
    container: ElementId,
    measurer: Arc<FixedMeasurer>,
}

impl Bar {
    fn new(available: f32) -> Self {
        let mut tree = NavTree::new();
        let container = tree.append(tree.root(), Role::Container).unwrap();
        tree.set_position(container, ContainerPosition::Left).unwrap();
        Self {
            tree,
            container,
            measurer: Arc::new(FixedMeasurer::new().with_available(available)),
        }
    }

    fn iconic(&mut self, label: &str, width: f32, title_width: f32) -> (ElementId, ElementId) {
        let item = self.tree.append(self.container, Role::Item).unwrap();
        self.tree.append(item, Role::Icon).unwrap();
        let title = self.tree.append_text(item, Role::Title, label).unwrap();
        self.measurer
            .set_box(item, BoxWidth::new(width - 8.0).with_margins(4.0, 4.0));
        self.measurer.set_width(title, title_width);
        (item, title)
    }

    fn plain(&mut self, label: &str, width: f32) -> (ElementId, ElementId) {
        let item = self.tree.append(self.container, Role::Item).unwrap();
        let title = self.tree.append_text(item, Role::Title, label).unwrap();
        self.measurer.set_width(item, width);
        self.measurer.set_width(title, width / 2.0);
        (item, title)
    }

    fn navbar(self) -> (Navbar, Arc<FixedMeasurer>) {
        let measurer = self.measurer.clone();
        (Navbar::new(self.tree, self.measurer, NavbarConfig::default()), measurer)
    }
}

fn collapsed_titles(navbar: &Navbar, titles: &[ElementId]) -> Vec<bool> {
    titles
        .iter()
        .map(|&title| navbar.tree().has_collapsed_marker(title))
        .collect()
}

#[test]
fn test_repeated_pass_is_idempotent() {
    setup();
    let mut bar = Bar::new(450.0);
    let titles: Vec<ElementId> = [("Assets", 180.0, 90.0), ("Events", 160.0, 70.0), ("Reports", 200.0, 110.0)]
        .into_iter()
        .map(|(label, width, title)| bar.iconic(label, width, title).1)
        .collect();
    let (mut navbar, _) = bar.navbar();

    let first = navbar.recompute_collapse();
    let first_state = collapsed_titles(&navbar, &titles);
    let second = navbar.recompute_collapse();

    assert_eq!(first, second);
    assert_eq!(first_state, collapsed_titles(&navbar, &titles));
}

#[test]
fn test_no_expanded_island_before_collapsed_item() {
    setup();
    for available in [0.0, 150.0, 300.0, 420.0, 520.0, 640.0, 800.0, 2000.0] {
        let mut bar = Bar::new(available);
        let mut titles = Vec::new();
        for (i, width) in [120.0, 90.0, 150.0, 110.0, 130.0, 100.0].into_iter().enumerate() {
            if i == 2 {
                bar.plain("Static", 60.0);
            }
            titles.push(bar.iconic(&format!("Item {i}"), width, width * 0.6).1);
        }
        let (mut navbar, _) = bar.navbar();
        navbar.recompute_collapse();

        // In processing order (last to first) collapsed items form a prefix.
        let states: Vec<bool> = collapsed_titles(&navbar, &titles).into_iter().rev().collect();
        let first_expanded = states.iter().position(|&c| !c).unwrap_or(states.len());
        assert!(
            states[first_expanded..].iter().all(|&c| !c),
            "island at available = {available}: {states:?}"
        );
    }
}

#[test]
fn test_collapsed_widths_are_stable_until_invalidated() {
    setup();
    let mut bar = Bar::new(300.0);
    let (_, first_title) = bar.iconic("First", 200.0, 80.0);
    let (_, second_title) = bar.iconic("Second", 200.0, 120.0);
    bar.plain("Plain", 100.0);
    let (mut navbar, measurer) = bar.navbar();

    let sum = |navbar: &mut Navbar| -> f32 {
        navbar
            .items()
            .iter()
            .filter(|item| item.can_collapse())
            .map(CachedItemWidth::collapsed_width)
            .sum()
    };

    let before = sum(&mut navbar);
    assert_eq!(before, 200.0);

    measurer.set_width(first_title, 10.0);
    measurer.set_width(second_title, 10.0);
    for _ in 0..5 {
        navbar.recompute_collapse();
        assert_eq!(sum(&mut navbar), before);
    }

    navbar.invalidate_widths();
    assert_eq!(sum(&mut navbar), 20.0);
}

#[test]
fn test_collapsed_title_becomes_tooltip_verbatim() {
    setup();
    let mut bar = Bar::new(100.0);
    let (item, _) = bar.iconic("Short", 300.0, 150.0);
    let (mut navbar, measurer) = bar.navbar();
    let label = "Events & incidents / 100% (ünïcode)";
    navbar.set_collapsed_title(item, label).unwrap();

    navbar.recompute_collapse();
    assert_eq!(navbar.tree().tooltip(item), Some(label));

    measurer.set_available(Some(1000.0));
    navbar.recompute_collapse();
    assert_eq!(navbar.tree().tooltip(item), None);
}

#[test]
fn test_reference_scenario() {
    setup();
    // Declared A, B, C; processed C, B, A.
    let mut bar = Bar::new(500.0);
    let (a, a_title) = bar.plain("A", 100.0);
    let (b, b_title) = bar.iconic("B", 200.0, 80.0);
    let (c, c_title) = bar.iconic("C", 300.0, 150.0);
    let (mut navbar, _) = bar.navbar();

    assert_eq!(navbar.total_width(), 600.0);
    let report = navbar.recompute_collapse();

    assert_eq!(report.deficit, 100.0);
    assert_eq!(report.collapsed, vec![c]);
    assert!(navbar.tree().has_collapsed_marker(c_title));
    assert!(!navbar.tree().has_collapsed_marker(b_title));
    assert!(!navbar.tree().has_collapsed_marker(a_title));
    assert_eq!(navbar.tree().tooltip(b), None);
    assert_eq!(navbar.tree().tooltip(a), None);
    assert_eq!(
        navbar.element_classes(c_title),
        vec!["mc-navbar-title", "mc-navbar-collapsed-title"]
    );
}

#[test]
fn test_item_without_icon_never_collapses() {
    setup();
    for available in [0.0, 50.0, 10_000.0] {
        let mut bar = Bar::new(available);
        let (plain, plain_title) = bar.plain("No icon", 400.0);
        let (mut navbar, _) = bar.navbar();

        navbar.recompute_collapse();
        let item = navbar
            .items()
            .iter()
            .find(|item| item.element() == plain)
            .cloned()
            .unwrap();
        assert!(!item.can_collapse());
        assert!(!navbar.tree().has_collapsed_marker(plain_title));
        assert_eq!(navbar.tree().tooltip(plain), None);
    }
}

#[test]
fn test_resize_burst_runs_one_pass() {
    setup();
    let mut bar = Bar::new(200.0);
    bar.iconic("Resizable", 300.0, 120.0);
    let (navbar, measurer) = bar.navbar();

    let clock = ManualClock::new();
    let mut navbar = navbar.with_clock(clock.clone());
    let source = ResizeSource::new();
    navbar.attach(&source);
    assert_eq!(navbar.tick(), 1);

    let passes = Arc::new(AtomicUsize::new(0));
    let counter = passes.clone();
    navbar.collapse_updated.connect(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    // Ten events within 50ms.
    for i in 0..10 {
        measurer.set_available(Some(200.0 + i as f32 * 10.0));
        source.emit(ResizeEvent::new(200.0 + i as f32 * 10.0, 600.0));
        assert_eq!(navbar.tick(), 0);
        clock.advance(Duration::from_millis(5));
    }
    // Last event at +45ms; clock reads +50ms.
    assert_eq!(navbar.time_until_next_tick(), Some(Duration::from_millis(95)));

    clock.advance(Duration::from_millis(94));
    assert_eq!(navbar.tick(), 0);
    assert_eq!(passes.load(Ordering::SeqCst), 0);

    clock.advance(Duration::from_millis(1));
    assert_eq!(navbar.tick(), 1);
    assert_eq!(passes.load(Ordering::SeqCst), 1);

    clock.advance(Duration::from_secs(1));
    assert_eq!(navbar.tick(), 0);
    assert_eq!(passes.load(Ordering::SeqCst), 1);
    assert_eq!(navbar.time_until_next_tick(), None);
}

#[test]
fn test_dropping_navbar_releases_resize_subscription() {
    setup();
    let bar = Bar::new(200.0);
    let (mut navbar, _) = bar.navbar();
    let source = ResizeSource::new();

    navbar.attach(&source);
    assert_eq!(source.subscriber_count(), 1);

    drop(navbar);
    assert_eq!(source.subscriber_count(), 0);
    source.emit(ResizeEvent::new(100.0, 100.0));
}

#[test]
fn test_config_drives_navbar() {
    setup();
    let config = NavbarConfig::from_toml_str(
        r#"
        vertical = true
        closed = false
        resize_debounce_ms = 20
        "#,
    )
    .unwrap();
    let mut navbar = Navbar::new(NavTree::new(), FixedMeasurer::new(), config);

    assert!(navbar.is_vertical());
    assert!(!navbar.is_closed());
    assert_eq!(
        navbar.surface_classes(),
        vec!["mc-navbar", "mc-navbar_vertical", "mc-navbar_opened"]
    );

    navbar.toggle();
    assert!(navbar.is_closed());
}
