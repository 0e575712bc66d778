use std::{mem, ops::Range};

use crate::{Error, Signal};

/// Index ranges of the +1 and -1 blocks for one output digit.
///
/// For output index `i` the pattern holds every coefficient for `i + 1`
/// positions, so in each cycle of width `4 * (i + 1)` there's one block of +1
/// starting at `i`, and one block of -1 starting `2 * (i + 1)` after it.
struct Pattern {
    out_ind: usize,
    signal_len: usize,
}

impl Pattern {
    pub fn new(out_ind: usize, signal_len: usize) -> Self {
        Self {
            out_ind,
            signal_len,
        }
    }

    pub fn blocks(&self) -> impl Iterator<Item = (Range<usize>, Range<usize>)> {
        let wnd_width = self.out_ind + 1;
        let signal_len = self.signal_len;
        let clamp = move |ind: usize| ind.min(signal_len);
        (self.out_ind..signal_len)
            .step_by(wnd_width * 4)
            .map(move |start| {
                let neg_start = start + wnd_width * 2;
                (
                    clamp(start)..clamp(start + wnd_width),
                    clamp(neg_start)..clamp(neg_start + wnd_width),
                )
            })
    }
}

fn fill_prefix_sums(inputs: &[u32], sums: &mut Vec<i64>) {
    sums.clear();
    sums.push(0);
    let mut acc = 0;
    for d in inputs {
        acc += i64::from(*d);
        sums.push(acc);
    }
}

// Process one phase, `sums` is scratch space for the prefix sums of inputs.
fn process(inputs: &[u32], sums: &mut Vec<i64>, outputs: &mut [u32]) {
    debug_assert_eq!(inputs.len(), outputs.len());
    fill_prefix_sums(inputs, sums);
    let block_sum = |r: Range<usize>| sums[r.end] - sums[r.start];

    for (ind, d) in outputs.iter_mut().enumerate() {
        let total = Pattern::new(ind, inputs.len())
            .blocks()
            .map(|(one_r, neg_one_r)| block_sum(one_r) - block_sum(neg_one_r))
            .sum::<i64>();

        // Only the ones digit of the absolute value is kept.
        *d = (total.unsigned_abs() % 10) as u32;
    }
}

/// Apply one phase of FFT to given digits.
pub fn phase(inputs: &[u32]) -> Vec<u32> {
    let mut sums = Vec::with_capacity(inputs.len() + 1);
    let mut outputs = vec![0; inputs.len()];
    process(inputs, &mut sums, &mut outputs);
    outputs
}

/// Runs phases over a signal of fixed length, reusing its buffers between phases.
pub struct Fft {
    sums: Vec<i64>,
    outputs: Vec<u32>,
}

impl Fft {
    pub fn new(signal_len: usize) -> Self {
        Self {
            sums: Vec::with_capacity(signal_len + 1),
            outputs: vec![0; signal_len],
        }
    }

    pub fn process_n(&mut self, signal: &mut Signal, phase_count: usize) -> Result<(), Error> {
        let signal_len = signal.len();
        let outputs_len = self.outputs.len();
        if signal_len != outputs_len {
            return Err(Error::WrongSignalLen(signal_len, outputs_len));
        }

        for p_ind in 0..phase_count {
            eprintln!("Phase {}...", p_ind + 1);
            process(&signal.digits, &mut self.sums, &mut self.outputs);
            mem::swap(&mut signal.digits, &mut self.outputs);
        }

        Ok(())
    }
}

#[cfg(test)]
fn naive_phase(inputs: &[u32]) -> Vec<u32> {
    const BASE_PATTERN: [i64; 4] = [0, 1, 0, -1];
    (0..inputs.len())
        .map(|out_ind| {
            let total = inputs
                .iter()
                .enumerate()
                .map(|(in_ind, d)| {
                    i64::from(*d) * BASE_PATTERN[((in_ind + 1) / (out_ind + 1)) % 4]
                })
                .sum::<i64>();
            (total.abs() % 10) as u32
        })
        .collect()
}

#[test]
fn test_pattern_blocks() {
    let blocks = Pattern::new(0, 8).blocks().collect::<Vec<_>>();
    assert_eq!(blocks, vec![(0..1, 2..3), (4..5, 6..7)]);

    let blocks = Pattern::new(1, 8).blocks().collect::<Vec<_>>();
    assert_eq!(blocks, vec![(1..3, 5..7)]);

    // Blocks running past the end are clamped.
    let blocks = Pattern::new(2, 8).blocks().collect::<Vec<_>>();
    assert_eq!(blocks, vec![(2..5, 8..8)]);

    assert_eq!(Pattern::new(7, 8).blocks().count(), 1);
}

#[test]
fn test_phase() {
    assert_eq!(phase(&[1, 2, 3, 4, 5, 6, 7, 8]), vec![4, 8, 2, 2, 6, 1, 5, 8]);
}

#[test]
fn test_four_phases() {
    let mut digits = vec![1, 2, 3, 4, 5, 6, 7, 8];
    let expect_outputs = [
        [4, 8, 2, 2, 6, 1, 5, 8],
        [3, 4, 0, 4, 0, 4, 3, 8],
        [0, 3, 4, 1, 5, 5, 1, 8],
        [0, 1, 0, 2, 9, 4, 9, 8],
    ];
    for expect in expect_outputs {
        digits = phase(&digits);
        assert_eq!(digits, expect);
    }
}

#[test]
fn test_phase_of_empty() {
    assert!(phase(&[]).is_empty());
}

#[test]
fn test_phase_matches_naive() {
    // Deterministic pseudo-random digits.
    let mut seed = 12345u64;
    let digits = (0..997)
        .map(|_| {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            ((seed >> 33) % 10) as u32
        })
        .collect::<Vec<_>>();

    let outputs = phase(&digits);
    assert_eq!(outputs.len(), digits.len());
    assert!(outputs.iter().all(|d| *d < 10));
    assert_eq!(outputs, naive_phase(&digits));
}

#[test]
fn test_phase_isnt_idempotent() {
    let signal = Signal::try_from("80871224585914546619083218645595").unwrap();
    let once = phase(signal.digits());
    let twice = phase(&once);
    assert_ne!(once, signal.digits());
    assert_ne!(twice, once);
}

#[test]
fn test_process_n_matches_phase() {
    let signal = Signal::try_from("19617804207202209144916044189917").unwrap();
    for phase_count in [0, 1, 2, 5] {
        let mut expect = signal.digits().to_vec();
        for _ in 0..phase_count {
            expect = phase(&expect);
        }

        let mut processed = signal.clone();
        let mut fft = Fft::new(processed.len());
        fft.process_n(&mut processed, phase_count).unwrap();
        assert_eq!(processed.digits(), expect.as_slice());
    }
}

#[test]
fn test_process_n_wrong_len() {
    let mut signal = Signal::try_from("12345678").unwrap();
    let mut fft = Fft::new(4);
    assert!(matches!(
        fft.process_n(&mut signal, 1),
        Err(Error::WrongSignalLen(8, 4))
    ));
}

#[test]
fn test_process_hundred_phases() {
    let cases = [
        ("80871224585914546619083218645595", "24176176"),
        ("19617804207202209144916044189917", "73745418"),
        ("69317163492948606335995924319873", "52432133"),
    ];
    for (input, expect) in cases {
        let mut signal = Signal::try_from(input).unwrap();
        let mut fft = Fft::new(signal.len());
        fft.process_n(&mut signal, crate::PHASE_COUNT).unwrap();
        assert_eq!(signal.message(0).unwrap(), expect);
    }
}
