use audio_base::{db_to_linear, format_number, linear_to_db, parse_number};
use crossbeam_utils::thread;

const THREADS: usize = 8;
const PER_THREAD: usize = 5_000;

fn amplitude(i: usize) -> f64 {
	(i as f64).mul_add(1.37e-4, 1e-7)
}

fn convert(i: usize) -> (f64, f64, String, Option<f64>) {
	let amp = amplitude(i);
	let db = linear_to_db(amp);
	let text = format_number(db);
	let parsed = parse_number(&text);

	(db, db_to_linear(db), text, parsed)
}

#[test]
fn concurrent_calls_match_sequential() {
	let sequential = (0..THREADS * PER_THREAD).map(convert).collect::<Vec<_>>();

	let concurrent = thread::scope(|s| {
		let workers = (0..THREADS)
			.map(|t| {
				s.spawn(move |_| {
					(t * PER_THREAD..(t + 1) * PER_THREAD)
						.map(convert)
						.collect::<Vec<_>>()
				})
			})
			.collect::<Vec<_>>();

		workers
			.into_iter()
			.flat_map(|worker| worker.join().unwrap())
			.collect::<Vec<_>>()
	})
	.unwrap();

	assert_eq!(concurrent.len(), sequential.len());

	for (i, (a, b)) in concurrent.iter().zip(&sequential).enumerate() {
		assert_eq!(a.0.to_bits(), b.0.to_bits(), "db mismatch at {i}");
		assert_eq!(a.1.to_bits(), b.1.to_bits(), "linear mismatch at {i}");
		assert_eq!(a.2, b.2, "text mismatch at {i}");
		assert_eq!(a.3, Some(a.0), "round trip failed at {i}");
	}
}

#[test]
fn concurrent_f32_conversions_hit_the_floor_consistently() {
	thread::scope(|s| {
		for t in 0..THREADS {
			s.spawn(move |_| {
				for i in 0..PER_THREAD {
					let amp = (t * PER_THREAD + i) as f32 * 1e-9;

					if amp < audio_base::MINIMUM_LINEAR_LEVEL {
						assert_eq!(linear_to_db(amp), audio_base::MINIMUM_DB_LEVEL);
					} else {
						assert!(linear_to_db(amp) > audio_base::MINIMUM_DB_LEVEL - 1e-3);
					}
				}
			});
		}
	})
	.unwrap();
}
