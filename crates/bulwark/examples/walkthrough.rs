//! Walk through each primitive, including the failure paths.
//!
//! Run with `cargo run -p bulwark --example walkthrough`. Enter a line at
//! the prompt; anything over 19 bytes is refused and the next line is read.

use std::io::{self, Write};

use bulwark::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Bounded copy.
    let mut small = [0u8; 10];
    match copy(&mut small, Some(b"This is a very long string that will overflow".as_slice())) {
        Ok(n) => println!("copied {n} bytes"),
        Err(e) => println!("copy refused: {e}"),
    }
    let n = copy(&mut small, Some(b"Hello".as_slice()))?;
    println!("copied {n} bytes: {}", String::from_utf8_lossy(&small[..n]));

    // 2. Bounded append onto a terminated buffer.
    let mut greeting = [0u8; 50];
    copy(&mut greeting, Some(b"Hello, ".as_slice()))?;
    let len = append(&mut greeting, Some(b"World".as_slice()))?;
    println!("appended: {}", String::from_utf8_lossy(&greeting[..len]));

    // 3. Bounded line input.
    print!("name> ");
    io::stdout().flush()?;
    let mut name = [0u8; 20];
    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        match read_line(&mut input, &mut name) {
            Ok(Some(n)) => {
                println!("hello, {}", String::from_utf8_lossy(&name[..n]));
                break;
            }
            Ok(None) => {
                println!("no input");
                break;
            }
            Err(MemError::Truncation { .. }) => {
                print!("too long, try again> ");
                io::stdout().flush()?;
            }
            Err(e) => return Err(e.into()),
        }
    }

    // 4. Owned duplicate.
    let factory = OwnedStringFactory::default();
    let mut owned = factory.duplicate_str("Hello")?;
    owned.as_bytes_mut()[0] = b'J';
    println!("duplicate: {:?} ({} bytes allocated)", owned, owned.allocated_bytes());
    drop(owned);

    // 5. Owned buffer with explicit growth.
    let allocator = CheckedAllocator::default();
    let mut buf: OwnedBuffer = OwnedBuffer::create(10, &allocator)?;
    for v in 0..10 {
        buf.push(v)?;
    }
    if let Err(e) = buf.push(10) {
        println!("push refused: {e}");
        buf.resize_capacity(20, &allocator)?;
        buf.push(10)?;
    }
    println!("buffer: size {} capacity {}", buf.size(), buf.capacity());
    buf.destroy();
    let again = buf.destroy();
    println!("after destroy: {}, second destroy released storage: {again}", buf.state());

    // 6. Allocation with the process-terminating policy at one call site.
    let checked = allocator.allocate(64).or_terminate();
    println!("allocated {} bytes", checked.len());

    Ok(())
}
