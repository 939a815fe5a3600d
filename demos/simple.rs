use circbuf::CopyRb;

fn main() {
    let mut rb = CopyRb::<i32>::new(4).unwrap();

    rb.try_push(0).unwrap();
    rb.try_push(1).unwrap();
    rb.try_push(2).unwrap();
    assert_eq!(rb.try_push(3), Err(3));

    assert_eq!(rb.try_pop(), Some(0));

    rb.try_push(3).unwrap();

    assert_eq!(rb.try_pop(), Some(1));
    assert_eq!(rb.try_pop(), Some(2));
    assert_eq!(rb.try_pop(), Some(3));
    assert_eq!(rb.try_pop(), None);

    println!("pushed and popped through a wrap without losing order");
}
