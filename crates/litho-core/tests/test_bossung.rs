use litho_core::bossung::run_bossung_sweep;
use litho_core::error::LithoError;
use litho_core::mask;
use litho_core::pipeline::config::{BossungParams, PupilParams, ZernikeKey};
use litho_core::pipeline::Pipeline;

fn line_space_sweep() -> BossungParams {
    BossungParams {
        focus_range_um: (-1.0, 1.0),
        focus_steps: 11,
        dose_range: (1.0, 1.0),
        dose_steps: 1,
    }
}

#[test]
fn pipeline_run_count_equals_focus_steps_regardless_of_dose_steps() {
    let mut pipeline = Pipeline::new();
    let mask = mask::line_space(10, 5);
    let sweep = BossungParams {
        dose_steps: 7,
        ..line_space_sweep()
    };

    let result = run_bossung_sweep(&mut pipeline, &mask, &PupilParams::default(), &sweep).unwrap();

    assert_eq!(result.pipeline_runs, sweep.focus_steps);
    assert_eq!(result.focus_values.len(), sweep.focus_steps);
    assert_eq!(result.curves.len(), sweep.dose_steps);
}

#[test]
fn defocus_is_symmetric_in_focus_sign() {
    let mut pipeline = Pipeline::new();
    let mask = mask::line_space(10, 5);
    let sweep = line_space_sweep();

    let result = run_bossung_sweep(&mut pipeline, &mask, &PupilParams::default(), &sweep).unwrap();
    let curve = &result.curves[0];

    for i in 0..curve.points.len() / 2 {
        let lo = &curve.points[i];
        let hi = &curve.points[curve.points.len() - 1 - i];
        assert!((lo.focus_um + hi.focus_um).abs() < 1e-9);
        assert!(
            (lo.cd_nm - hi.cd_nm).abs() < 2.0 * litho_core::consts::PIXEL_SIZE_NM,
            "focus {} vs {}: cd {} vs {}",
            lo.focus_um,
            hi.focus_um,
            lo.cd_nm,
            hi.cd_nm
        );
    }
}

#[test]
fn spherical_aberration_degrades_cd_relative_to_baseline() {
    let mut pipeline = Pipeline::new();
    let mask = mask::isolated_line(6);

    let baseline_sweep = BossungParams {
        focus_range_um: (0.0, 0.0),
        focus_steps: 1,
        dose_range: (1.0, 1.0),
        dose_steps: 1,
    };

    let baseline = run_bossung_sweep(&mut pipeline, &mask, &PupilParams::default(), &baseline_sweep).unwrap();

    let mut aberrated_params = PupilParams::default();
    aberrated_params.zernike.set(ZernikeKey::Z9, 0.5);
    let aberrated = run_bossung_sweep(&mut pipeline, &mask, &aberrated_params, &baseline_sweep).unwrap();

    let baseline_cd = baseline.curves[0].points[0].cd_nm;
    let aberrated_cd = aberrated.curves[0].points[0].cd_nm;
    assert!(
        (aberrated_cd - baseline_cd).abs() > 0.0,
        "expected aberration to change the measured CD"
    );
}

#[test]
fn zero_focus_steps_is_rejected() {
    let mut pipeline = Pipeline::new();
    let mask = mask::blank();
    let sweep = BossungParams {
        focus_steps: 0,
        ..line_space_sweep()
    };

    let err = run_bossung_sweep(&mut pipeline, &mask, &PupilParams::default(), &sweep).unwrap_err();
    assert!(matches!(err, LithoError::InvalidFocusSteps(0)));
}
