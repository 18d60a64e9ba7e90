use classic_collections::search::{
    binary_search_iterative, binary_search_recursive, BinarySearch, IterativeBinarySearch,
    RecursiveBinarySearch,
};
use rand::Rng;

#[test]
fn int_test_primes() {
    let mut numbers = vec![11, 59, 3, 2, 53, 17, 31, 7, 19, 67, 47, 13, 37, 61, 29, 43, 5, 41, 23];
    numbers.sort();

    assert_eq!(binary_search_recursive(&numbers, &2), Some(0));
    assert_eq!(binary_search_recursive(&numbers, &67), Some(18));
    assert_eq!(binary_search_recursive(&numbers, &43), Some(13));
    assert_eq!(binary_search_recursive(&numbers, &42), None);

    assert_eq!(binary_search_iterative(&numbers, &2), Some(0));
    assert_eq!(binary_search_iterative(&numbers, &67), Some(18));
    assert_eq!(binary_search_iterative(&numbers, &43), Some(13));
    assert_eq!(binary_search_iterative(&numbers, &42), None);
}

#[test]
fn int_test_random_sorted() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    for _ in 0..100 {
        let len = rng.gen_range(0, 500);
        let mut items: Vec<u32> = (0..len).map(|_| rng.gen_range(0, 1_000)).collect();
        items.sort();

        for _ in 0..50 {
            let key = rng.gen_range(0, 1_000);
            let recursive = RecursiveBinarySearch.search(&items, &key);
            let iterative = IterativeBinarySearch.search(&items, &key);

            assert_eq!(recursive, iterative);
            assert_eq!(recursive.is_some(), items.binary_search(&key).is_ok());
            if let Some(index) = recursive {
                assert_eq!(items[index], key);
            }
        }
    }
}

#[test]
fn int_test_every_element_found() {
    let mut rng = rand::thread_rng();
    let mut items: Vec<i64> = (0..1_000).map(|_| rng.gen::<i64>()).collect();
    items.sort();
    items.dedup();

    for (index, key) in items.iter().enumerate() {
        assert_eq!(RecursiveBinarySearch.search(&items, key), Some(index));
        assert_eq!(IterativeBinarySearch.search(&items, key), Some(index));
    }
}

#[test]
fn int_test_ranges_agree() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([2, 2, 2, 2]);
    let items: Vec<u32> = (0..256).map(|x| x * 2).collect();
    for _ in 0..1_000 {
        let start = rng.gen_range(0, 300);
        let end = rng.gen_range(0, 300);
        let key = rng.gen_range(0, 520);
        let recursive = RecursiveBinarySearch.search_range(&items, &key, start..end);
        let iterative = IterativeBinarySearch.search_range(&items, &key, start..end);
        assert_eq!(recursive, iterative);

        let in_range = key % 2 == 0 && (key / 2) < 256 && start <= (key / 2) as usize
            && ((key / 2) as usize) < end;
        assert_eq!(recursive.is_some(), in_range);
    }
}
