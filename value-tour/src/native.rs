//! The host language's own value categories, next to the scripting ones in
//! [`crate::catalog`].

use std::io::{self, Write};

use paste::paste;

macro_rules! scalars {
    ( ints: $( $int:ident )*; floats: $( $float:ident )*; ) => { paste! {
        /// One binding per scalar primitive.
        #[derive(Clone, Copy, Debug, PartialEq)]
        pub struct Scalars {
            $( pub [<my_ $int>]: $int, )*
            $( pub [<my_ $float>]: $float, )*
            pub my_char: char,
            pub my_bool: bool,
            pub my_unit: (),
        }

        impl Scalars {
            pub fn new() -> Self {
                Self {
                    $( [<my_ $int>]: 10, )*
                    $( [<my_ $float>]: 10.5, )*
                    my_char: '🐶',
                    my_bool: false,
                    my_unit: (),
                }
            }
        }
    } };
}

scalars! {
    ints: isize i8 i16 i32 i64 i128 usize u8 u16 u32 u64 u128;
    floats: f32 f64;
}

impl Default for Scalars {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed size groups of values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Compounds {
    pub tuple: (i32, f64, u8),
    pub array: [i32; 5],
}

impl Compounds {
    pub fn new() -> Self {
        Self {
            tuple: (500, 6.4, 1),
            array: [1, 2, 3, 4, 5],
        }
    }
}

impl Default for Compounds {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Nil;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pair(pub i32, pub f32);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WebEvent {
    PageLoad,
    KeyPress(char),
    Click { x: i64, y: i64 },
}

impl WebEvent {
    pub fn describe(self) -> String {
        match self {
            WebEvent::PageLoad => "page loaded".to_owned(),
            WebEvent::KeyPress(key) => format!("pressed '{key}'"),
            WebEvent::Click { x, y } => format!("clicked at x={x}, y={y}"),
        }
    }
}

fn announce(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "I have been called!")
}

/// Walks through the custom types, function pointers and closures, writing what each one shows.
pub fn tour(out: &mut impl Write) -> io::Result<()> {
    let nil = Nil;
    log::debug!("unit struct {nil:?} takes {} bytes", std::mem::size_of_val(&nil));

    let point = Point { x: 0.3, y: 0.4 };
    writeln!(out, "point coordinates: ({}, {})", point.x, point.y)?;

    let pair = Pair(1, 0.1);
    writeln!(out, "pair contains {:?} and {:?}", pair.0, pair.1)?;

    let function_pointer: fn(&mut dyn Write) -> io::Result<()> = announce;
    function_pointer(out)?;

    let closure_annotated = |i: i32| -> i32 { i + 1 };
    let closure_inferred = |i| i + 1;
    writeln!(out, "closure_annotated: {}", closure_annotated(10))?;
    writeln!(out, "closure_inferred: {}", closure_inferred(10))?;

    for event in [
        WebEvent::PageLoad,
        WebEvent::KeyPress('x'),
        WebEvent::Click { x: 20, y: 80 },
    ] {
        log::debug!("{}", event.describe());
    }

    Ok(())
}
