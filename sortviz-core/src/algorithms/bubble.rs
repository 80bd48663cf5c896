use crate::step::AnimationStep;

/// Adjacent-pair bubble sort. Each exchange emits two swaps, one per slot.
pub fn bubble_sort_steps(data: &[u32]) -> Vec<AnimationStep> {
    let mut arr = data.to_vec();
    let mut steps = Vec::new();
    let len = arr.len();

    for i in 0..len {
        for j in 0..len - i - 1 {
            steps.push(AnimationStep::compare([j, j + 1]));
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                steps.push(AnimationStep::swap(j, arr[j]));
                steps.push(AnimationStep::swap(j + 1, arr[j + 1]));
            }
        }
    }
    steps
}
