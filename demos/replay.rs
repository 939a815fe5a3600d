//! Peek/skip workflow: examine queued data, decide how much of it to
//! commit, replay the rest later.

use circbuf::CopyRb;

fn main() {
    let mut rb = CopyRb::<u8>::new(16).unwrap();

    assert_eq!(rb.push_slice(b"HEADERpayload"), 13);

    // look at the first bytes without consuming anything
    let mut header = [0u8; 6];
    assert_eq!(rb.peek_slice(&mut header), 6);
    println!("peeked header: {}", core::str::from_utf8(&header).unwrap());
    assert_eq!(rb.occupied_len(), 13);

    // the same peek again sees the same bytes
    let mut again = [0u8; 6];
    assert_eq!(rb.peek_slice(&mut again), 6);
    assert_eq!(header, again);

    // commit the header, then read the payload
    assert_eq!(rb.skip(6), 6);
    let mut payload = [0u8; 7];
    assert_eq!(rb.pop_slice(&mut payload), 7);
    println!("payload: {}", core::str::from_utf8(&payload).unwrap());
}
