use crate::step::AnimationStep;

/// Quick sort with a Lomuto partition around the last element of each range.
pub fn quick_sort_steps(data: &[u32]) -> Vec<AnimationStep> {
    let mut arr = data.to_vec();
    let mut steps = Vec::new();
    if arr.len() > 1 {
        let hi = arr.len() - 1;
        sort_range(&mut arr, 0, hi, &mut steps);
    }
    steps
}

fn sort_range(arr: &mut [u32], lo: usize, hi: usize, steps: &mut Vec<AnimationStep>) {
    if lo >= hi {
        return;
    }
    let pivot = partition(arr, lo, hi, steps);
    if pivot > lo {
        sort_range(arr, lo, pivot - 1, steps);
    }
    sort_range(arr, pivot + 1, hi, steps);
}

fn partition(arr: &mut [u32], lo: usize, hi: usize, steps: &mut Vec<AnimationStep>) -> usize {
    let pivot = arr[hi];
    let mut store = lo;

    for j in lo..hi {
        steps.push(AnimationStep::compare([j, hi]));
        if arr[j] < pivot {
            exchange(arr, store, j, steps);
            store += 1;
        }
    }
    exchange(arr, store, hi, steps);
    store
}

fn exchange(arr: &mut [u32], a: usize, b: usize, steps: &mut Vec<AnimationStep>) {
    if a == b {
        return;
    }
    arr.swap(a, b);
    steps.push(AnimationStep::swap(a, arr[a]));
    steps.push(AnimationStep::swap(b, arr[b]));
}
