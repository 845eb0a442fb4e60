mod common;

use common::*;
use nalgebra::Point2;
use trimtess::prelude::*;

fn two_contours() -> Vec<Contour2D<f64>> {
    let explicit = RawTrimCurve::new(
        vec![
            Point2::new(0.1, 0.1),
            Point2::new(0.5, 0.0),
            Point2::new(0.9, 0.1),
        ],
        vec![1., 0.5, 1.],
    )
    .with_order(3)
    .with_knots(vec![0., 0., 0., 1., 1., 1.]);
    vec![
        Contour2D::new(vec![explicit]),
        Contour2D::new(vec![RawTrimCurve::polyline(&[
            Point2::new(0.2, 0.2),
            Point2::new(0.8, 0.2),
            Point2::new(0.8, 0.8),
            Point2::new(0.2, 0.2),
        ])]),
    ]
}

#[test]
fn surface_parameters() {
    let definition = surface(4, 3, 8)
        .with_orders(3, 2)
        .with_knots(vec![0., 0., 0., 1., 2., 2., 2.], vec![0., 0., 1., 2., 2.]);
    let payload = TessellationPayload::try_new(&definition).unwrap();

    assert_eq!(payload.u_last_index, 3);
    assert_eq!(payload.v_last_index, 2);
    assert_eq!(payload.u_degree, 2);
    assert_eq!(payload.v_degree, 1);
    assert_eq!(payload.u_knots, definition.u_knots);
    assert_eq!(payload.v_knots, definition.v_knots);
    assert_eq!(payload.control_points.len(), 12);
    assert_eq!(
        payload.control_points.as_slice(),
        definition.control_points.points()
    );
    assert_eq!(payload.weights, vec![1.; 12]);
    assert_eq!((payload.u_tessellation, payload.v_tessellation), (8, 8));
    assert!(!payload.is_trimmed());
}

#[test]
fn trim_loops() {
    let definition = surface(4, 4, 0).with_trimming_contours(two_contours());
    let payload = TessellationPayload::try_new(&definition).unwrap();

    assert!(payload.is_trimmed());
    assert_eq!(payload.trim_loops.len(), 2);

    let explicit = &payload.trim_loops[0][0];
    assert_eq!(explicit.last_index, 2);
    assert_eq!(explicit.degree, 2);
    assert_eq!(explicit.knots, vec![0., 0., 0., 1., 1., 1.]);
    assert_eq!(explicit.weights, vec![1., 0.5, 1.]);

    let polyline = &payload.trim_loops[1][0];
    assert_eq!(polyline.last_index, 3);
    assert_eq!(polyline.degree, 1);
    assert_eq!(polyline.knots.len(), 7);
    assert_eq!(polyline.control_points[1], Point2::new(0.8, 0.2));
}

#[test]
fn malformed_trim_curve() {
    let mut contours = two_contours();
    contours[1].push(RawTrimCurve::new(vec![Point2::new(0., 0.)], vec![1.]));
    let definition = surface(4, 4, 0).with_trimming_contours(contours);
    assert!(matches!(
        TessellationPayload::try_new(&definition),
        Err(TessError::MalformedCurve(_))
    ));
}

#[test]
#[cfg(feature = "serde")]
fn positional_layout() {
    let definition = surface(2, 2, 0)
        .with_knots(vec![0., 0., 1., 1.], vec![0., 0., 1., 1.])
        .with_trimming_contours(two_contours());
    let payload = TessellationPayload::try_new(&definition).unwrap();
    let json = serde_json::to_value(&payload).unwrap();

    let fields = json.as_array().unwrap();
    assert_eq!(fields.len(), 11);
    assert_eq!(fields[0], 1);
    assert_eq!(fields[1], 1);
    assert_eq!(fields[2], 1);
    assert_eq!(fields[3], 1);
    assert_eq!(fields[4], serde_json::json!([0., 0., 1., 1.]));
    assert_eq!(fields[6][3], serde_json::json!([1., 1., 0.]));
    assert_eq!(fields[8], 0);

    let polyline = &fields[10][1][0];
    assert_eq!(polyline[0], 3);
    assert_eq!(polyline[1], 1);
    assert_eq!(polyline[2], serde_json::json!([0., 0., 1., 2., 3., 4., 4.]));
    assert_eq!(polyline[3][0], serde_json::json!([0.2, 0.2]));
    assert_eq!(polyline[4], serde_json::json!([1., 1., 1., 1.]));

    let decoded: TessellationPayload<f64> = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, payload);
}

#[test]
#[cfg(feature = "serde")]
fn untrimmed_payload_has_empty_trim_list() {
    let payload = TessellationPayload::try_new(&surface(3, 3, 0)).unwrap();
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json[10], serde_json::json!([]));
}

#[test]
#[cfg(feature = "serde")]
fn truncated_payload_is_rejected() {
    let result = serde_json::from_str::<TrimCurvePayload<f64>>("[3, 1, [0, 0, 1, 1]]");
    assert!(result.is_err());
}
