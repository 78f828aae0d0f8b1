use crate::IntError;
use bytemuck::{pod_read_unaligned, Pod};
use core::mem::size_of;

/// Splits a `P` off the front of `bytes`, without any alignment requirement.
#[inline]
pub(crate) fn try_pull_pod<P: Pod>(bytes: &[u8]) -> Result<(P, &[u8]), IntError> {
  let position = size_of::<P>();
  if bytes.len() >= position {
    let (head, tail) = bytes.split_at(position);
    let p: P = pod_read_unaligned(head);
    Ok((p, tail))
  } else {
    Err(IntError::NotEnoughBytes)
  }
}
