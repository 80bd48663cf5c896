use crate::step::AnimationStep;

/// Selection sort. Compares each candidate to the running minimum.
pub fn selection_sort_steps(data: &[u32]) -> Vec<AnimationStep> {
    let mut arr = data.to_vec();
    let mut steps = Vec::new();
    let len = arr.len();

    for i in 0..len {
        let mut min_idx = i;
        for j in i + 1..len {
            steps.push(AnimationStep::compare([j, min_idx]));
            if arr[j] < arr[min_idx] {
                min_idx = j;
            }
        }
        if min_idx != i {
            arr.swap(i, min_idx);
            steps.push(AnimationStep::swap(i, arr[i]));
            steps.push(AnimationStep::swap(min_idx, arr[min_idx]));
        }
    }
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::apply_swaps;

    #[test]
    fn sorts_with_duplicates() {
        let data = [3, 1, 3, 0, 1];
        let steps = selection_sort_steps(&data);
        assert_eq!(apply_swaps(&data, &steps), vec![0, 1, 1, 3, 3]);
    }

    #[test]
    fn compare_count_is_quadratic() {
        let steps = selection_sort_steps(&[1, 2, 3, 4]);
        let compares = steps.iter().filter(|s| !s.is_swap()).count();
        assert_eq!(compares, 6);
    }
}
