extern crate inline_fn;

use inline_fn::{Callable, InlineFn, Signature};

#[test]
fn arities() {
    let mut f0: InlineFn<fn() -> u32> = InlineFn::new(|| 0u32);
    let mut f1: InlineFn<fn(u32) -> u32> = InlineFn::new(|a: u32| a);
    let mut f2: InlineFn<fn(u32, u32) -> u32> = InlineFn::new(|a: u32, b: u32| a + b);
    let mut f3: InlineFn<fn(u32, u32, u32) -> u32> =
        InlineFn::new(|a: u32, b: u32, c: u32| a + b + c);
    let mut f8: InlineFn<fn(u8, u16, u32, u64, i8, i16, i32, i64) -> i64> = InlineFn::new(
        |a: u8, b: u16, c: u32, d: u64, e: i8, f: i16, g: i32, h: i64| {
            i64::from(a) + i64::from(b) + i64::from(c) + d as i64 + i64::from(e)
                + i64::from(f)
                + i64::from(g)
                + h
        },
    );

    assert_eq!(f0.call(), Ok(0));
    assert_eq!(f1.call(1), Ok(1));
    assert_eq!(f2.call(1, 2), Ok(3));
    assert_eq!(f3.call(1, 2, 3), Ok(6));
    assert_eq!(f8.call(1, 2, 3, 4, 5, 6, 7, 8), Ok(36));
}

#[test]
fn mixed_argument_types() {
    let prefix = '>';
    let mut render: InlineFn<fn(String, usize) -> String> =
        InlineFn::new(move |text: String, width: usize| format!("{prefix}{text:>width$}"));
    assert_eq!(render.call("ab".to_owned(), 4), Ok(">  ab".to_owned()));
}

#[test]
fn unit_output() {
    let mut f: InlineFn<fn(u32)> = InlineFn::new(|_: u32| {});
    assert_eq!(f.call(1), Ok(()));
}

#[test]
fn function_items_and_pointers() {
    fn negate(x: i32) -> i32 {
        -x
    }

    let mut item: InlineFn<fn(i32) -> i32> = InlineFn::new(negate);
    assert_eq!(item.call(3), Ok(-3));

    let pointer: fn(i32) -> i32 = negate;
    let mut boxed_pointer: InlineFn<fn(i32) -> i32> = InlineFn::new(pointer);
    assert_eq!(boxed_pointer.call(4), Ok(-4));
}

#[test]
fn tuple_invoke() {
    let mut f: InlineFn<fn(i32, i32) -> i32> = InlineFn::new(|a: i32, b: i32| a * b);
    assert_eq!(f.invoke((6, 7)), Ok(42));
}

#[test]
fn generic_over_signature() {
    fn call_twice<S, F>(f: F, args: S::Args) -> S::Output
    where
        S: Signature,
        S::Args: Clone,
        F: Callable<S>,
    {
        let mut boxed: InlineFn<S> = InlineFn::new(f);
        let _ = boxed.invoke(args.clone());
        boxed.invoke(args).ok().unwrap()
    }

    let mut calls = 0;
    let result = call_twice::<fn(i32) -> i32, _>(
        move |x: i32| {
            calls += 1;
            x + calls
        },
        (10,),
    );
    assert_eq!(result, 12);
}
