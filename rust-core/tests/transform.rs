use chirpz::transform::{direct_z_transform, Contour};
use chirpz::{czt, czt_range, czt_with, CztError, CztOptions, CztPlan, FrequencyBand};
use num_complex::Complex64;
use rustfft::FftPlanner;
use std::f64::consts::PI;
use std::sync::Arc;

fn test_signal(n: usize) -> Vec<Complex64> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            Complex64::new((0.37 * t).sin() + 0.25 * (1.9 * t).cos(), (0.11 * t).cos() - 0.5)
        })
        .collect()
}

fn reference_fft(x: &[Complex64], len: usize) -> Vec<Complex64> {
    let mut buffer = x.to_vec();
    buffer.resize(len, Complex64::new(0.0, 0.0));
    FftPlanner::<f64>::new().plan_fft_forward(len).process(&mut buffer);
    buffer
}

fn max_error(a: &[Complex64], b: &[Complex64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).norm()).fold(0.0, f64::max)
}

fn l1_norm(x: &[Complex64]) -> f64 {
    x.iter().map(|z| z.norm()).sum()
}

fn peak_index(y: &[Complex64]) -> usize {
    y.iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.norm().total_cmp(&b.norm()))
        .map(|(i, _)| i)
        .unwrap()
}

fn complex_tone(f0: f64, fs: f64, n: usize) -> Vec<Complex64> {
    (0..n)
        .map(|k| Complex64::from_polar(1.0, 2.0 * PI * f0 * k as f64 / fs))
        .collect()
}

#[test]
fn defaults_reproduce_dft() {
    for &n in &[1usize, 2, 3, 7, 16, 100, 257, 1000, 1024] {
        let x = test_signal(n);
        let y = czt(&x).unwrap();
        let expected = reference_fft(&x, n);

        assert_eq!(y.len(), n);
        let err = max_error(&y, &expected);
        assert!(
            err < 1e-9 * l1_norm(&x),
            "n={}: max error {} for signal magnitude {}",
            n,
            err,
            l1_norm(&x)
        );
    }
}

#[test]
fn real_input_matches_complex_input() {
    let real: Vec<f64> = (0..64).map(|i| (i as f64 * 0.21).sin()).collect();
    let complex: Vec<Complex64> = real.iter().map(|&v| Complex64::new(v, 0.0)).collect();
    assert_eq!(czt(&real).unwrap(), czt(&complex).unwrap());
}

#[test]
fn output_length_follows_m() {
    for &n in &[1usize, 3, 17, 500] {
        let x = test_signal(n);
        for &m in &[1usize, 2, 5, 64, 1000, 3000] {
            let y = czt_with(&x, &CztOptions::default().with_points(m)).unwrap();
            assert_eq!(y.len(), m, "n={} m={}", n, m);
        }
    }
}

#[test]
fn spiral_contour_matches_direct_evaluation() {
    let x = test_signal(120);
    let contour = Contour {
        m: 90,
        w: Complex64::from_polar(0.998, -2.0 * PI / 180.0),
        a: Complex64::from_polar(0.95, 0.4),
    };
    let options = CztOptions::default()
        .with_points(contour.m)
        .with_ratio(contour.w)
        .with_start(contour.a);

    let fast = czt_with(&x, &options).unwrap();
    let direct = direct_z_transform(&x, &contour).unwrap();
    let scale = direct.iter().map(|z| z.norm()).fold(1.0, f64::max);
    assert!(max_error(&fast, &direct) < 1e-8 * scale);
}

#[test]
fn single_tone_peak_matches_padded_dft() {
    let fs = 1000.0;
    let (fmin, fmax, m) = (10.0, 15.0, 501);
    let bin_width = (fmax - fmin) / (m - 1) as f64;
    let n_padding = 1 << 20;

    for &f0 in &[10.0, 11.111, 12.3456789, 13.5, 14.99, 15.0] {
        let x = complex_tone(f0, fs, 800);

        let y = czt_range(&x, m, fmin, fmax, Some(fs)).unwrap();
        let czt_peak = fmin + peak_index(&y) as f64 * bin_width;

        let padded = reference_fft(&x, n_padding);
        let dft_peak = peak_index(&padded) as f64 * fs / n_padding as f64;

        assert!(
            (czt_peak - dft_peak).abs() <= bin_width,
            "f0={}: czt peak {} vs dft peak {}",
            f0,
            czt_peak,
            dft_peak
        );
        assert!((czt_peak - f0).abs() <= bin_width / 2.0 + 1e-9);
    }
}

#[test]
fn band_endpoints_map_to_first_and_last_bins() {
    let fs = 1000.0;
    let (fmin, fmax, m) = (10.0, 15.0, 501);

    let at_fmin = czt_range(&complex_tone(fmin, fs, 800), m, fmin, fmax, Some(fs)).unwrap();
    assert_eq!(peak_index(&at_fmin), 0);

    let at_fmax = czt_range(&complex_tone(fmax, fs, 800), m, fmin, fmax, Some(fs)).unwrap();
    assert_eq!(peak_index(&at_fmax), m - 1);

    // A tone on the endpoint evaluates to the full coherent sum
    assert!((at_fmin[0].norm() - 800.0).abs() < 1e-6);
    assert!((at_fmax[m - 1].norm() - 800.0).abs() < 1e-6);
}

#[test]
fn normalized_band_equals_hz_band() {
    let x = test_signal(300);
    let hz = czt_range(&x, 64, 50.0, 120.0, Some(1000.0)).unwrap();
    let norm = czt_range(&x, 64, 0.05, 0.12, None).unwrap();
    assert!(max_error(&hz, &norm) < 1e-9 * l1_norm(&x));
}

#[test]
fn full_band_sweep_matches_dft_bins() {
    // m points over [0, (m-1)/m] cycles/sample is exactly the m-point DFT grid
    let n = 64;
    let x = test_signal(n);
    let y = czt_range(&x, n, 0.0, (n - 1) as f64 / n as f64, None).unwrap();
    let expected = reference_fft(&x, n);
    assert!(max_error(&y, &expected) < 1e-9 * l1_norm(&x));
}

#[test]
fn scaling_input_scales_output() {
    let x = test_signal(200);
    let c = Complex64::new(-2.5, 0.75);
    let scaled: Vec<Complex64> = x.iter().map(|&v| v * c).collect();

    let y = czt_range(&x, 128, 0.1, 0.3, None).unwrap();
    let y_scaled = czt_range(&scaled, 128, 0.1, 0.3, None).unwrap();

    let expected: Vec<Complex64> = y.iter().map(|&v| v * c).collect();
    assert!(max_error(&y_scaled, &expected) < 1e-9 * c.norm() * l1_norm(&x));
}

#[test]
fn degenerate_inputs_are_rejected() {
    let empty: [f64; 0] = [];
    assert_eq!(czt(&empty), Err(CztError::EmptyInput));

    let x = [1.0, 2.0, 3.0];
    assert!(matches!(
        czt_range(&x, 1, 10.0, 15.0, Some(1000.0)),
        Err(CztError::InvalidLength { name: "m", value: 1, .. })
    ));
    assert!(matches!(
        czt_with(&x, &CztOptions::default().with_points(0)),
        Err(CztError::InvalidLength { name: "m", value: 0, .. })
    ));

    let zero = Complex64::new(0.0, 0.0);
    assert_eq!(
        czt_with(&x, &CztOptions::default().with_ratio(zero)),
        Err(CztError::DegenerateContour { name: "w" })
    );
    assert_eq!(
        czt_with(&x, &CztOptions::default().with_start(zero)),
        Err(CztError::DegenerateContour { name: "a" })
    );
    assert!(matches!(
        czt_range(&x, 8, 10.0, 15.0, Some(0.0)),
        Err(CztError::InvalidSampleRate(_))
    ));
}

#[test]
fn oversized_transforms_are_rejected() {
    let x = [1.0; 4];
    assert!(matches!(
        czt_with(&x, &CztOptions::default().with_points(usize::MAX)),
        Err(CztError::FftTooLarge { .. })
    ));
    assert!(matches!(
        czt_range(&x, usize::MAX / 2, 0.0, 0.5, None),
        Err(CztError::FftTooLarge { .. })
    ));
    assert_eq!(
        czt_with(&x, &CztOptions::default().with_points(100).with_max_fft_len(64)),
        Err(CztError::FftTooLarge {
            required: 128,
            limit: 64
        })
    );
}

#[test]
fn runaway_spiral_is_reported() {
    let x = test_signal(32);
    let options = CztOptions::default()
        .with_points(5000)
        .with_ratio(Complex64::new(1.2, 0.0));
    assert!(matches!(
        czt_with(&x, &options),
        Err(CztError::NonFiniteWeights { .. })
    ));
}

#[test]
fn shared_plan_across_threads() {
    let band = FrequencyBand::with_sample_rate(10.0, 15.0, 1000.0);
    let plan = Arc::new(CztPlan::for_band(800, 501, &band).unwrap());

    let results: Vec<(f64, usize)> = std::thread::scope(|scope| {
        let handles: Vec<_> = [10.5, 12.0, 14.25]
            .iter()
            .map(|&f0| {
                let plan = Arc::clone(&plan);
                scope.spawn(move || {
                    let y = plan.process(&complex_tone(f0, 1000.0, 800)).unwrap();
                    (f0, peak_index(&y))
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (f0, peak) in results {
        let expected = ((f0 - 10.0) / 0.01).round() as usize;
        assert_eq!(peak, expected, "f0={}", f0);
    }
}
