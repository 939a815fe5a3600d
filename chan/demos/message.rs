use circbuf_chan::Chan;
use std::thread;

fn main() {
    let chan = Chan::<u8>::new(16).unwrap();
    let (mut tx, mut rx) = chan.split();

    let smsg = "The quick brown fox jumps over the lazy dog";

    let pjh = thread::spawn(move || {
        println!("-> sending message: '{smsg}'");

        for b in smsg.bytes() {
            tx.push(b).unwrap();
        }
        tx.push(0).unwrap();

        println!("-> message sent");
    });

    let cjh = thread::spawn(move || {
        println!("<- receiving message");

        let mut bytes = Vec::new();
        loop {
            match rx.pop().unwrap() {
                0 => break,
                b => bytes.push(b),
            }
        }

        let msg = String::from_utf8(bytes).unwrap();
        println!("<- message received: '{msg}'");

        msg
    });

    pjh.join().unwrap();
    let rmsg = cjh.join().unwrap();

    assert_eq!(smsg, rmsg);
}
