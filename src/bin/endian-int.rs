//! Prints how integers are laid out in each byte order.
//!
//! `endian-int 0x12345678 300` shows, for every width the number fits in, the
//! little-endian and big-endian bytes, and what truncating it would give for
//! the widths it doesn't fit in.
//!
//! Set `RUST_LOG=debug` to see each conversion step.

use endian_int::*;

use log::{debug, trace, LevelFilter};

fn main() -> Result<(), IntError> {
  env_logger::Builder::new()
    .filter_module(env!("CARGO_CRATE_NAME"), LevelFilter::Info)
    .parse_default_env()
    .init();

  let args: Vec<String> = std::env::args().skip(1).collect();
  if args.is_empty() {
    println!("usage: endian-int <number>...");
    return Ok(());
  }
  for arg in &args {
    let value = parse_arg(arg)?;
    debug!("{arg:?} parsed as {value:#x}");
    println!("{value} ({value:#x})");
    show_width::<u8>(value);
    show_width::<u16>(value);
    show_width::<u32>(value);
    show_width::<u64>(value);
  }
  Ok(())
}

fn parse_arg(arg: &str) -> Result<u64, IntError> {
  let parsed: Int<u64, NativeEndian> = match arg.strip_prefix("0x") {
    Some(hex) => Int::new(u64::from_str_radix(hex, 16)?),
    None => arg.parse()?,
  };
  Ok(parsed.value())
}

/// How a value looks at one width.
#[derive(Debug, PartialEq, Eq)]
enum WidthView<T: Primitive> {
  Fits { le: Int<T, LittleEndian>, be: Int<T, BigEndian> },
  Truncated(Int<T, NativeEndian>),
}

fn view_at<T>(value: u64) -> WidthView<T>
where
  T: Primitive + TryFrom<u64>,
  u64: TruncatingCast<T>,
{
  match Int::<T, LittleEndian>::try_new(value) {
    Ok(le) => WidthView::Fits { le, be: le.swap_order() },
    Err(e) => {
      debug!("{}: {e}", core::any::type_name::<T>());
      WidthView::Truncated(narrow_cast(Int::<u64, NativeEndian>::new(value)))
    }
  }
}

fn show_width<T>(value: u64)
where
  T: Primitive + TryFrom<u64>,
  u64: TruncatingCast<T>,
{
  let name = core::any::type_name::<T>();
  match view_at::<T>(value) {
    WidthView::Fits { le, be } => {
      trace!("{name}: {le:?} swapped to {be:?}");
      println!("  {name:>4} LE {:02X?}", le.as_bytes());
      println!("  {name:>4} BE {:02X?}", be.as_bytes());
    }
    WidthView::Truncated(cut) => {
      println!("  {name:>4} doesn't fit, truncates to {cut} ({cut:#x})");
    }
  }
}
