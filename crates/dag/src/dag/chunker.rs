use bytes::Bytes;

/// Split a payload into ordered, fixed-size slices.
///
/// Every slice is `chunk_size` bytes except possibly the last. An empty
/// payload yields a single empty slice, so zero-byte content still
/// produces one leaf. Slices borrow the source buffer; nothing is copied.
pub fn chunk(data: &Bytes, chunk_size: usize) -> Vec<Bytes> {
    debug_assert!(chunk_size > 0);
    if data.is_empty() {
        return vec![Bytes::new()];
    }
    let mut slices = Vec::with_capacity(data.len().div_ceil(chunk_size));
    let mut offset = 0;
    while offset < data.len() {
        let end = usize::min(offset + chunk_size, data.len());
        slices.push(data.slice(offset..end));
        offset = end;
    }
    slices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_split() {
        let data = Bytes::from(vec![7u8; 4096]);
        let slices = chunk(&data, 1024);
        assert_eq!(slices.len(), 4);
        assert!(slices.iter().all(|s| s.len() == 1024));
    }

    #[test]
    fn test_short_last_slice() {
        let data = Bytes::from(vec![1u8; 2500]);
        let slices = chunk(&data, 1000);
        assert_eq!(slices.len(), 3);
        assert_eq!(slices[0].len(), 1000);
        assert_eq!(slices[1].len(), 1000);
        assert_eq!(slices[2].len(), 500);
    }

    #[test]
    fn test_single_slice_when_smaller() {
        let data = Bytes::from_static(b"tiny");
        let slices = chunk(&data, 1024);
        assert_eq!(slices.len(), 1);
        assert_eq!(&slices[0][..], b"tiny");
    }

    #[test]
    fn test_empty_payload_yields_one_empty_slice() {
        let slices = chunk(&Bytes::new(), 1024);
        assert_eq!(slices.len(), 1);
        assert!(slices[0].is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let data = Bytes::from((0u8..=255).collect::<Vec<u8>>());
        let slices = chunk(&data, 100);
        let rejoined: Vec<u8> = slices.iter().flat_map(|s| s.iter().copied()).collect();
        assert_eq!(rejoined, &data[..]);
    }
}
