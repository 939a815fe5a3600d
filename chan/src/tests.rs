use crate::Chan;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

#[test]
fn construction_rejects_bad_lens() {
    assert!(Chan::<u8>::new(0).is_err());
    assert!(Chan::<u8>::new(7).is_err());
    assert!(Chan::<u8>::new(8).is_ok());
}

#[test]
fn fill_then_drain_without_blocking() {
    let chan = Chan::<u32>::new(8).unwrap();
    assert_eq!(chan.capacity(), 7);

    let (mut tx, mut rx) = chan.split();

    // exactly `capacity` pushes go through without a peer
    for v in 1..=7 {
        tx.push(v).unwrap();
    }
    assert_eq!(tx.occupied_len(), 7);
    assert_eq!(tx.vacant_len(), 0);

    for v in 1..=7 {
        assert_eq!(rx.pop().unwrap(), v);
    }
    assert_eq!(rx.occupied_len(), 0);
}

#[test]
fn values_are_moved_not_copied() {
    let chan = Chan::<String>::new(4).unwrap();
    let (mut tx, mut rx) = chan.split();

    tx.push("across".to_string()).unwrap();
    tx.push("the queue".to_string()).unwrap();

    assert_eq!(rx.pop().unwrap(), "across");
    assert_eq!(rx.pop().unwrap(), "the queue");
}

#[test]
#[cfg_attr(miri, ignore)]
fn pop_blocks_until_a_push_arrives() {
    let chan = Chan::<u32>::new(2).unwrap();
    let (mut tx, mut rx) = chan.split();
    let (probe_tx, probe_rx) = mpsc::channel();

    let cjh = thread::spawn(move || {
        probe_tx.send(()).unwrap();
        // the channel is empty, so this parks until the producer acts
        rx.pop().unwrap()
    });

    // wait for the consumer to be running, then give it time to block
    probe_rx.recv().unwrap();
    thread::sleep(Duration::from_millis(50));

    tx.push(99).unwrap();
    assert_eq!(cjh.join().unwrap(), 99);
}

#[test]
#[cfg_attr(miri, ignore)]
fn push_blocks_until_a_pop_frees_a_slot() {
    let chan = Chan::<u32>::new(2).unwrap();
    let (mut tx, mut rx) = chan.split();

    tx.push(1).unwrap();

    let pjh = thread::spawn(move || {
        // the single usable slot is taken; this parks until the pop below
        tx.push(2).unwrap();
        tx
    });

    thread::sleep(Duration::from_millis(50));
    assert_eq!(rx.pop().unwrap(), 1);

    let _tx = pjh.join().unwrap();
    assert_eq!(rx.pop().unwrap(), 2);
}

#[test]
#[cfg_attr(miri, ignore)]
fn sustained_transfer_at_different_rates() {
    const COUNT: u32 = 1_000;

    let chan = Chan::<u32>::new(8).unwrap();
    let (mut tx, mut rx) = chan.split();

    let pjh = thread::spawn(move || {
        for v in 1..=COUNT {
            tx.push(v).unwrap();
        }
    });

    let cjh = thread::spawn(move || {
        for v in 1..=COUNT {
            // an occasional stall forces the producer to fill the queue
            if v % 64 == 0 {
                thread::sleep(Duration::from_millis(1));
            }
            assert_eq!(rx.pop().unwrap(), v);
        }
    });

    pjh.join().unwrap();
    cjh.join().unwrap();
}
