use crate::window::{target_indices, ChildSize, ViewPool, VirtualizationWindow};

/// Pool that records every acquire/release and counts measurements.
struct RecordingPool {
    acquired: Vec<usize>,
    released: Vec<usize>,
    measure_calls: usize,
}

struct TestView {
    #[allow(dead_code)]
    page: usize,
}

impl RecordingPool {
    fn new() -> Self {
        Self {
            acquired: Vec::new(),
            released: Vec::new(),
            measure_calls: 0,
        }
    }
}

impl ViewPool for RecordingPool {
    type View = TestView;

    fn acquire(&mut self, index: usize) -> TestView {
        self.acquired.push(index);
        TestView { page: index }
    }

    fn measure(&mut self, _view: &TestView) -> ChildSize {
        self.measure_calls += 1;
        ChildSize {
            width: 320.0,
            height: 480.0,
        }
    }

    fn release(&mut self, index: usize, _view: TestView) {
        self.released.push(index);
    }
}

#[test]
fn idle_aligned_view_keeps_only_current_page() {
    let mut pool = RecordingPool::new();
    let mut window = VirtualizationWindow::new();

    window.reconcile(&mut pool, Some(2), 5, false);

    assert_eq!(window.materialized_indices().as_slice(), &[2]);
    assert_eq!(window.len(), 1);
}

#[test]
fn scrolling_materializes_neighbors() {
    let mut pool = RecordingPool::new();
    let mut window = VirtualizationWindow::new();

    window.reconcile(&mut pool, Some(2), 5, true);

    assert_eq!(window.materialized_indices().as_slice(), &[1, 2, 3]);
}

#[test]
fn window_intersects_with_valid_range() {
    let mut pool = RecordingPool::new();

    let mut window = VirtualizationWindow::new();
    window.reconcile(&mut pool, Some(0), 5, true);
    assert_eq!(window.materialized_indices().as_slice(), &[0, 1]);

    let mut window = VirtualizationWindow::new();
    window.reconcile(&mut pool, Some(4), 5, true);
    assert_eq!(window.materialized_indices().as_slice(), &[3, 4]);

    let mut window = VirtualizationWindow::<TestView>::new();
    window.reconcile(&mut pool, Some(0), 1, true);
    assert_eq!(window.materialized_indices().as_slice(), &[0]);
}

#[test]
fn entering_idle_collapses_to_single_view() {
    let mut pool = RecordingPool::new();
    let mut window = VirtualizationWindow::new();

    window.reconcile(&mut pool, Some(2), 5, true);
    window.reconcile(&mut pool, Some(2), 5, false);

    assert_eq!(window.materialized_indices().as_slice(), &[2]);
    assert_eq!(pool.released, vec![1, 3], "neighbors must go back to the pool");
}

#[test]
fn moving_window_releases_stale_and_acquires_missing() {
    let mut pool = RecordingPool::new();
    let mut window = VirtualizationWindow::new();

    window.reconcile(&mut pool, Some(2), 10, true);
    pool.acquired.clear();

    window.reconcile(&mut pool, Some(3), 10, true);

    assert_eq!(window.materialized_indices().as_slice(), &[2, 3, 4]);
    assert_eq!(pool.released, vec![1]);
    assert_eq!(pool.acquired, vec![4], "views still in the window are reused");
}

#[test]
fn child_size_is_measured_once_and_cached() {
    let mut pool = RecordingPool::new();
    let mut window = VirtualizationWindow::new();

    window.reconcile(&mut pool, Some(0), 10, true);
    window.reconcile(&mut pool, Some(1), 10, true);
    window.reconcile(&mut pool, Some(2), 10, true);

    assert_eq!(pool.measure_calls, 1);
    assert_eq!(
        window.child_size(),
        Some(ChildSize {
            width: 320.0,
            height: 480.0
        })
    );
}

#[test]
fn clear_releases_everything() {
    let mut pool = RecordingPool::new();
    let mut window = VirtualizationWindow::new();

    window.reconcile(&mut pool, Some(2), 5, true);
    window.clear(&mut pool);

    assert!(window.is_empty());
    assert_eq!(pool.released, vec![1, 2, 3]);
}

#[test]
fn empty_data_set_has_empty_window() {
    let mut pool = RecordingPool::new();
    let mut window = VirtualizationWindow::<TestView>::new();

    window.reconcile(&mut pool, None, 0, true);

    assert!(window.is_empty());
    assert!(pool.acquired.is_empty());
}

#[test]
fn target_set_is_bounded_by_three() {
    for current in 0..10 {
        for show_neighbors in [false, true] {
            let target = target_indices(Some(current), 10, show_neighbors);
            assert!(target.len() <= 3);
            assert!(target.contains(&current));
        }
    }

    assert!(target_indices(None, 10, true).is_empty());
    // A stale current index beyond the data set materializes nothing.
    assert!(target_indices(Some(7), 3, true).is_empty());
}
