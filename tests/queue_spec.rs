use pocket_solver::pocket::queue::WorkQueue;
use pocket_solver::PocketError;

#[test]
fn dequeues_in_insertion_order() {
    let mut queue = WorkQueue::with_capacity(4);
    for i in 1..=3 {
        queue.enqueue(i).unwrap();
    }
    assert_eq!(queue.len(), 3);
    assert_eq!(queue.peek(), Some(1));
    assert_eq!(queue.dequeue(), Some(1));
    queue.enqueue(4).unwrap();
    let rest: Vec<_> = std::iter::from_fn(|| queue.dequeue()).collect();
    assert_eq!(rest, vec![2, 3, 4]);
    assert!(queue.is_empty());
    assert_eq!(queue.peek(), None);
}

#[test]
fn rejects_items_beyond_capacity() {
    let mut queue = WorkQueue::with_capacity(2);
    queue.enqueue('a').unwrap();
    queue.enqueue('b').unwrap();
    assert!(queue.is_full());
    assert_eq!(queue.capacity(), 2);
    assert!(matches!(
        queue.enqueue('c'),
        Err(PocketError::QueueFull { capacity: 2 })
    ));
    assert_eq!(queue.dequeue(), Some('a'));
    assert!(queue.enqueue('c').is_ok());
}

#[test]
fn zero_capacity_accepts_nothing() {
    let mut queue: WorkQueue<u32> = WorkQueue::with_capacity(0);
    assert!(queue.is_full());
    assert!(queue.enqueue(1).is_err());
    assert_eq!(queue.dequeue(), None);
}
