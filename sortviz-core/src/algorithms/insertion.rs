use crate::step::AnimationStep;

/// Insertion sort by shifting. Each shift writes one slot; the key lands last.
pub fn insertion_sort_steps(data: &[u32]) -> Vec<AnimationStep> {
    let mut arr = data.to_vec();
    let mut steps = Vec::new();

    for i in 1..arr.len() {
        let key = arr[i];
        let mut j = i;
        while j > 0 {
            steps.push(AnimationStep::compare([j - 1, j]));
            if arr[j - 1] <= key {
                break;
            }
            arr[j] = arr[j - 1];
            steps.push(AnimationStep::swap(j, arr[j]));
            j -= 1;
        }
        if j != i {
            arr[j] = key;
            steps.push(AnimationStep::swap(j, key));
        }
    }
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::apply_swaps;

    #[test]
    fn reversed_input() {
        let data = [5, 4, 3, 2, 1];
        let steps = insertion_sort_steps(&data);
        assert_eq!(apply_swaps(&data, &steps), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn no_writes_when_sorted() {
        let steps = insertion_sort_steps(&[1, 1, 2, 3]);
        assert!(steps.iter().all(|s| !s.is_swap()));
    }
}
