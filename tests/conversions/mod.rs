use endian_int::*;

#[test]
fn test_int_to_int_widening_construct() {
  let a = Int::<u16, NativeEndian>::new(0x1234);
  let b = Int::<u16, NonNativeEndian>::new(0x5678);

  let x1 = Int::<u32, NativeEndian>::from(a);
  let x2 = Int::<u32, NativeEndian>::from(b);
  let y1 = Int::<u32, NonNativeEndian>::from(a);
  let y2 = Int::<u32, NonNativeEndian>::from(b);
  assert_eq!(x1.value(), 0x1234);
  assert_eq!(x2.value(), 0x5678);
  assert_eq!(y1.value(), 0x1234);
  assert_eq!(y2.value(), 0x5678);
}

#[test]
fn test_same_type_cross_order() {
  let a = Int::<u32, NativeEndian>::new(1234);
  let x: Int<u32, NativeEndian> = a;
  let y: Int<u32, NonNativeEndian> = a.into();
  let b = Int::<u32, NonNativeEndian>::new(5678);
  let w: Int<u32, NativeEndian> = Int::from(b);
  let z: Int<u32, NonNativeEndian> = b;
  assert_eq!(x.value(), 1234);
  assert_eq!(y.value(), 1234);
  assert_eq!(w.value(), 5678);
  assert_eq!(z.value(), 5678);
  assert_eq!(y.raw(), a.raw().swap_bytes());
}

#[test]
fn test_assign_widen_from_int() {
  let a = Int::<u16, NativeEndian>::new(321);
  let b = Int::<u16, NonNativeEndian>::new(654);
  let mut dest = Int::<u32, NativeEndian>::default();
  dest = a.into();
  assert_eq!(dest.value(), 321);
  dest = b.into();
  assert_eq!(dest.value(), 654);
  dest.set_int(a);
  assert_eq!(dest.value(), 321);
}

#[test]
fn test_narrowing_needs_truncate_or_check() {
  let a = Int::<u32, NativeEndian>::new(0x1234_5678);
  let mut dest = Int::<u16, NativeEndian>::default();
  dest = a.truncate();
  assert_eq!(dest.value(), 0x5678);
  dest = narrow_cast(a);
  assert_eq!(dest.value(), 0x5678);
  assert_eq!(Int::<u16, NativeEndian>::try_from_int(a), Err(IntError::OutOfRange));
  let small = Int::<u32, NonNativeEndian>::new(0x5678);
  assert_eq!(Int::<u16, NativeEndian>::try_from_int(small), Ok(Int::new(0x5678)));
}

#[test]
fn test_scalar_in_widen() {
  let v: u16 = 123;
  let a: Int<u32, NativeEndian> = v.into();
  let b = Int::<u32, NonNativeEndian>::from(v);
  assert_eq!(a.value(), 123);
  assert_eq!(b.value(), 123);
  let mut c = Int::<i64, BigEndian>::default();
  c.set(-7_i8);
  assert_eq!(c.value(), -7);
  c.set(true);
  assert_eq!(c.value(), 1);
}

#[test]
fn test_scalar_in_checked() {
  assert_eq!(Int::<u16, NativeEndian>::try_new(0x1234_5678_u32), Err(IntError::OutOfRange));
  assert_eq!(Int::<u16, NativeEndian>::try_new(0x5678_u32).map(Int::value), Ok(0x5678));
  assert_eq!(Int::<u32, LittleEndian>::try_new(5_usize).map(Int::value), Ok(5));
  assert_eq!(Int::<i8, BigEndian>::try_new(-129_i32), Err(IntError::OutOfRange));
}

#[test]
fn test_scalar_out() {
  let a = Int::<u16, NativeEndian>::new(0x1234);
  let b = Int::<u16, NonNativeEndian>::new(0x5678);
  let u1: u32 = a.into();
  let u2: u32 = b.into();
  let u3: u16 = b.into();
  assert_eq!(u1, 0x1234);
  assert_eq!(u2, 0x5678);
  assert_eq!(u3, 0x5678);
}

#[test]
fn test_narrowing_is_judged_on_type_not_order() {
  // u8 -> u16 widens whatever the orders are
  let a = Int::<u8, BigEndian>::new(0xAB);
  let be: Int<u16, BigEndian> = a.into();
  let le: Int<u16, LittleEndian> = a.into();
  assert_eq!(be.value(), 0xAB);
  assert_eq!(le.value(), 0xAB);
  assert_eq!(be.as_bytes(), &[0x00, 0xAB]);
  assert_eq!(le.as_bytes(), &[0xAB, 0x00]);
}

#[test]
fn test_truncate_matches_as_cast() {
  let values = crate::rand_values::<u64>(500);
  for v in values {
    let be = Int::<u64, BigEndian>::new(v);
    let le = Int::<u64, LittleEndian>::new(v);
    assert_eq!(be.truncate::<u16>().value(), v as u16);
    assert_eq!(le.truncate::<u16>().value(), v as u16);
    assert_eq!(be.truncate::<i8>().value(), v as i8);
    assert_eq!(le.truncate::<i32>().value(), v as i32);
    assert_eq!(be.truncate::<u128>().value(), v as u128);
    let s = v as i64;
    assert_eq!(Int::<i64, BigEndian>::new(s).truncate::<u32>().value(), s as u32);
    assert_eq!(narrow_cast::<i16, _, _>(Int::<i64, LittleEndian>::new(s)).value(), s as i16);
  }
}

#[test]
fn test_from_str_and_from_bytes() {
  let x: U32BE = "305419896".parse().unwrap();
  assert_eq!(x.value(), 0x1234_5678);
  assert_eq!("-1".parse::<U32BE>(), Err(IntError::Parse));

  let bytes = [0x12, 0x34, 0x56, 0x78, 0xFF];
  let (be, rest) = U32BE::from_bytes(&bytes).unwrap();
  assert_eq!(be.value(), 0x1234_5678);
  assert_eq!(rest, &[0xFF]);
  let (le, _) = U32LE::from_bytes(&bytes).unwrap();
  assert_eq!(le.value(), 0x7856_3412);
  assert_eq!(U32LE::from_bytes(&bytes[2..]), Err(IntError::NotEnoughBytes));
}

#[test]
fn test_slice_from_bytes_rejects_bad_length() {
  let values = [U16LE::new(1), U16LE::new(2), U16LE::new(3)];
  let bytes = U16LE::slice_as_bytes(&values);
  assert_eq!(U16LE::slice_from_bytes(bytes), Ok(&values[..]));
  assert_eq!(U16LE::slice_from_bytes(&bytes[..5]), Err(IntError::Layout));
}

#[test]
fn test_aliases() {
  let a: BigInt = BigInt::new(-1);
  let b: LilUint<u64> = LilUint::new(1 << 40);
  assert_eq!(a.value(), -1_i32);
  assert_eq!(b.value(), 1 << 40);
  let c: I16BE = I16BE::new(-2);
  let d: I16LE = c.into();
  assert_eq!(d, c);
}
