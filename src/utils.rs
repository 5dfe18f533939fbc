pub fn tick_delay(ticks: usize) {
    (0..ticks).for_each(|_| core::hint::spin_loop());
}
