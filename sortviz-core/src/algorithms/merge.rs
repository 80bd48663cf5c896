use crate::step::AnimationStep;

/// Top-down merge sort. Every slot written during a merge becomes a swap step.
pub fn merge_sort_steps(data: &[u32]) -> Vec<AnimationStep> {
    let mut arr = data.to_vec();
    let mut steps = Vec::new();
    if arr.len() > 1 {
        let len = arr.len();
        sort_range(&mut arr, 0, len, &mut steps);
    }
    steps
}

fn sort_range(arr: &mut [u32], lo: usize, hi: usize, steps: &mut Vec<AnimationStep>) {
    if hi - lo <= 1 {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    sort_range(arr, lo, mid, steps);
    sort_range(arr, mid, hi, steps);
    merge(arr, lo, mid, hi, steps);
}

fn merge(arr: &mut [u32], lo: usize, mid: usize, hi: usize, steps: &mut Vec<AnimationStep>) {
    let left = arr[lo..mid].to_vec();
    let right = arr[mid..hi].to_vec();
    let (mut i, mut j, mut k) = (0, 0, lo);

    while i < left.len() && j < right.len() {
        steps.push(AnimationStep::compare([lo + i, mid + j]));
        if left[i] <= right[j] {
            arr[k] = left[i];
            i += 1;
        } else {
            arr[k] = right[j];
            j += 1;
        }
        steps.push(AnimationStep::swap(k, arr[k]));
        k += 1;
    }

    for &value in left[i..].iter().chain(&right[j..]) {
        arr[k] = value;
        steps.push(AnimationStep::swap(k, value));
        k += 1;
    }
}
