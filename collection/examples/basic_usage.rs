use collection::{Collection, CollectionError};

fn main() -> Result<(), CollectionError> {
    println!("=== Collection Examples ===\n");

    example_building()?;
    example_positional_edits()?;
    example_nesting();

    Ok(())
}

fn example_building() -> Result<(), CollectionError> {
    println!("Example 1: Building a collection");

    let mut names = Collection::from_items(["Tom", "Jerry"]);
    names.add("Spike");

    println!("  len: {}, capacity: {}", names.len(), names.capacity());
    println!("  rendered: {}", names);
    println!("  names[1]: {}", names.get(1)?);
    println!();

    Ok(())
}

fn example_positional_edits() -> Result<(), CollectionError> {
    println!("Example 2: Insert, exchange, remove");

    let mut nums = Collection::new();
    nums.add_range([1, 2, 3, 4]);

    nums.insert_at(1, 10)?;
    println!("  after insert_at(1, 10): {}", nums);

    nums.exchange(0, 4)?;
    println!("  after exchange(0, 4):   {}", nums);

    let removed = nums.remove_at(2)?;
    println!("  remove_at(2) returned {}, leaving {}", removed, nums);

    // Out-of-range indexes are recoverable errors, not panics
    match nums.get(100) {
        Ok(_) => unreachable!(),
        Err(e) => println!("  get(100) failed: {}", e),
    }
    println!();

    Ok(())
}

fn example_nesting() {
    println!("Example 3: Nested collections");

    let mut matrix = Collection::new();
    matrix.add(Collection::from_items([1, 2, 3]));
    matrix.add(Collection::from_items([4, 5]));

    println!("  rendered: {}", matrix);
}
