/// Stable u32-key radix sort for SoA (keys/vals).
/// - Sorts by keys ascending
/// - Reorders vals accordingly
/// - Equal keys keep their input order
///
/// Complexity: 4 passes, each O(n + 256)
pub fn radix_sort_u32_soa<N: Copy + Default>(keys: &mut [u32], vals: &mut [N]) {
    assert_eq!(keys.len(), vals.len());
    let n = keys.len();
    if n <= 1 {
        return;
    }

    // Small sizes: insertion sort beats allocating scratch.
    if n <= 32 {
        insertion_sort_u32_soa(keys, vals);
        return;
    }

    let mut src_keys = keys.to_vec();
    let mut src_vals = vals.to_vec();
    let mut dst_keys = vec![0u32; n];
    let mut dst_vals = vec![N::default(); n];

    // 4 passes: byte 0..3 (LSD)
    for shift in [0u32, 8, 16, 24] {
        let mut count = [0usize; 256];
        for &k in &src_keys {
            count[((k >> shift) & 0xFF) as usize] += 1;
        }

        // prefix sum -> starting positions
        let mut sum = 0usize;
        for c in count.iter_mut() {
            let tmp = *c;
            *c = sum;
            sum += tmp;
        }

        // distribute (stable)
        for (&k, &v) in src_keys.iter().zip(src_vals.iter()) {
            let b = ((k >> shift) & 0xFF) as usize;
            let pos = count[b];
            count[b] = pos + 1;
            dst_keys[pos] = k;
            dst_vals[pos] = v;
        }

        std::mem::swap(&mut src_keys, &mut dst_keys);
        std::mem::swap(&mut src_vals, &mut dst_vals);
    }

    keys.copy_from_slice(&src_keys);
    vals.copy_from_slice(&src_vals);
}

/// Tiny insertion sort for small n (SoA), stable.
fn insertion_sort_u32_soa<N: Copy>(keys: &mut [u32], vals: &mut [N]) {
    for i in 1..keys.len() {
        let k = keys[i];
        let v = vals[i];
        let mut j = i;
        while j > 0 && keys[j - 1] > k {
            keys[j] = keys[j - 1];
            vals[j] = vals[j - 1];
            j -= 1;
        }
        keys[j] = k;
        vals[j] = v;
    }
}

/// Positions of `counts` ordered by count ascending, ties in input order
pub fn rank_ascending(counts: &[u32]) -> Vec<usize> {
    let mut keys = counts.to_vec();
    let mut order: Vec<usize> = (0..counts.len()).collect();
    radix_sort_u32_soa(&mut keys, &mut order);
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    /// sort by key, and if key is equal, preserve input order
    fn baseline_stable_sort(keys: &[u32], vals: &[u32]) -> (Vec<u32>, Vec<u32>) {
        let mut pairs: Vec<(u32, u32)> = keys.iter().copied().zip(vals.iter().copied()).collect();
        pairs.sort_by_key(|p| p.0);
        pairs.into_iter().unzip()
    }

    /// tiny deterministic PRNG (xorshift32)
    struct Rng(u32);
    impl Rng {
        fn next_u32(&mut self) -> u32 {
            let mut x = self.0;
            x ^= x << 13;
            x ^= x >> 17;
            x ^= x << 5;
            self.0 = x;
            x
        }
    }

    #[test]
    fn handles_empty_and_single() {
        let mut keys: Vec<u32> = vec![];
        let mut vals: Vec<u16> = vec![];
        radix_sort_u32_soa(&mut keys, &mut vals);
        assert!(keys.is_empty());

        let mut keys = vec![42u32];
        let mut vals = vec![7u16];
        radix_sort_u32_soa(&mut keys, &mut vals);
        assert_eq!((keys, vals), (vec![42], vec![7]));
    }

    #[test]
    fn stable_on_duplicates_small_and_large() {
        let mut rng = Rng(0x1234_5678);
        for &n in &[2usize, 7, 32, 33, 100, 1024] {
            // few distinct keys so ties are common
            let mut keys: Vec<u32> = (0..n).map(|_| rng.next_u32() % 5).collect();
            let mut vals: Vec<u32> = (0..n as u32).collect();
            let (base_k, base_v) = baseline_stable_sort(&keys, &vals);
            radix_sort_u32_soa(&mut keys, &mut vals);
            assert_eq!(keys, base_k, "keys mismatch at n={n}");
            assert_eq!(vals, base_v, "vals mismatch at n={n}");
        }
    }

    #[test]
    fn extremes() {
        let mut keys: Vec<u32> = vec![0, u32::MAX, 1, u32::MAX - 1, 0, 2, u32::MAX];
        keys.extend(std::iter::repeat(3).take(40));
        let mut vals: Vec<u32> = (0..keys.len() as u32).collect();
        let (base_k, base_v) = baseline_stable_sort(&keys, &vals);
        radix_sort_u32_soa(&mut keys, &mut vals);
        assert_eq!(keys, base_k);
        assert_eq!(vals, base_v);
    }

    #[test]
    fn rank_keeps_first_encounter_on_ties() {
        assert_eq!(rank_ascending(&[2, 1, 2, 1, 3]), vec![1, 3, 0, 2, 4]);
        assert!(rank_ascending(&[]).is_empty());
    }
}
