use super::*;

fn texts(queue: &ToastQueue) -> Vec<&str> {
    queue.iter().map(|t| t.text.as_str()).collect()
}

#[test]
fn push_preserves_insertion_order() {
    let mut queue = ToastQueue::new(5, 1_000.0);
    queue.push("first", ToastKind::Success, 0.0);
    queue.push("second", ToastKind::Error, 1.0);
    queue.push("third", ToastKind::Success, 2.0);
    assert_eq!(texts(&queue), vec!["first", "second", "third"]);
}

#[test]
fn push_assigns_unique_ids() {
    let mut queue = ToastQueue::new(5, 1_000.0);
    let a = queue.push("a", ToastKind::Success, 0.0);
    let b = queue.push("b", ToastKind::Success, 0.0);
    assert_ne!(a, b);
}

#[test]
fn push_beyond_capacity_evicts_oldest() {
    let mut queue = ToastQueue::new(2, 1_000.0);
    queue.push("a", ToastKind::Success, 0.0);
    queue.push("b", ToastKind::Success, 0.0);
    queue.push("c", ToastKind::Success, 0.0);
    assert_eq!(texts(&queue), vec!["b", "c"]);
}

#[test]
fn zero_capacity_is_clamped_to_one() {
    let mut queue = ToastQueue::new(0, 1_000.0);
    queue.push("a", ToastKind::Success, 0.0);
    queue.push("b", ToastKind::Success, 0.0);
    assert_eq!(texts(&queue), vec!["b"]);
}

#[test]
fn expire_removes_each_toast_on_its_own_timer() {
    let mut queue = ToastQueue::new(5, 1_000.0);
    queue.push("early", ToastKind::Success, 0.0);
    queue.push("late", ToastKind::Success, 600.0);

    assert_eq!(queue.expire(999.0), 0);
    assert_eq!(queue.expire(1_000.0), 1);
    assert_eq!(texts(&queue), vec!["late"]);
    assert_eq!(queue.expire(1_600.0), 1);
    assert!(queue.is_empty());
}

#[test]
fn dismiss_removes_only_the_target() {
    let mut queue = ToastQueue::new(5, 1_000.0);
    let a = queue.push("a", ToastKind::Success, 0.0);
    queue.push("b", ToastKind::Success, 0.0);
    assert!(queue.dismiss(a));
    assert!(!queue.dismiss(a));
    assert_eq!(texts(&queue), vec!["b"]);
}

#[test]
fn default_queue_uses_configured_ttl() {
    let queue = ToastQueue::default();
    assert!((queue.ttl_ms() - config::TOAST_TTL_MS).abs() < f64::EPSILON);
    assert_eq!(queue.len(), 0);
}

#[test]
fn notifier_pushes_into_shared_queue() {
    let owner = Owner::new();
    owner.with(|| {
        let notifier = provide_notifier();
        notifier.success("Sign up Successful!");
        let id = notifier.error("Sign up failed").unwrap();
        let queue = notifier.queue();
        assert_eq!(queue.with_untracked(ToastQueue::len), 2);
        notifier.dismiss(id);
        assert_eq!(
            queue.with_untracked(|q| q.iter().map(|t| t.kind).collect::<Vec<_>>()),
            vec![ToastKind::Success]
        );
    });
}
