use raycast::{
    Controls, DrawCommand, FrameBuffer, Grid, GridLocation, Point2, Pose, RenderConfig,
    RenderError, Renderer, Speeds, Vector2,
};

fn corridor() -> Grid {
    // one cell high, twelve long, closed at both ends
    Grid::parse(
        "\
111111111111
100000000001
111111111111",
    )
    .unwrap()
}

#[test]
fn test_repeated_renders_are_identical() {
    let grid = Grid::classic().unwrap();
    let renderer = Renderer::new(RenderConfig::new(320, 240));
    let mut pose = Pose::<f64>::classic();
    pose.rotate(1.1);

    let first = renderer.draw_calls(&pose, &grid).unwrap();
    let second = renderer.draw_calls(&pose, &grid).unwrap();
    assert_eq!(first.len(), 640);
    assert_eq!(first, second);

    let mut a = FrameBuffer::new(320, 240);
    let mut b = FrameBuffer::new(320, 240);
    renderer.render_frame(&pose, &grid, &mut a).unwrap();
    renderer.render_frame(&pose, &grid, &mut b).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_distance_grows_when_backing_away_from_wall() {
    let grid = corridor();
    let renderer = Renderer::new(RenderConfig::new(8, 8));
    let mut pose = Pose::new(
        Point2::new(1.5, 1.5),
        Vector2::new(-1.0, 0.0),
        Vector2::new(0.0, 0.66),
    );

    let mut last = 0.0;
    let mut last_height = i32::MAX;
    for _ in 0..40 {
        let hit = raycast::cast_column(&pose, 4, 8, &grid).unwrap();
        assert_eq!(hit.cell, GridLocation::new(0, 1));
        assert!(hit.distance >= last, "{} < {}", hit.distance, last);
        last = hit.distance;

        let stripe = renderer.cast_stripe(&pose, 4, &grid).unwrap();
        let height = stripe.draw_end - stripe.draw_start;
        assert!(height <= last_height);
        last_height = height;

        // step backwards, away from the west wall
        pose.translate(Vector2::new(0.25, 0.0), &grid).unwrap();
    }

    // stopped by the east wall, not pushed through it
    assert!(pose.position.x < 11.0);
}

#[test]
fn test_collision_matches_cell_kind_everywhere() {
    let grid = Grid::classic().unwrap();
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let kind = grid.get(GridLocation::new(x, y)).unwrap();
            for (dx, dy) in [(0.0, 0.0), (0.5, 0.5), (0.99, 0.01)] {
                let point = Point2::new(x as f64 + dx, y as f64 + dy);
                assert_eq!(grid.can_move(point).unwrap(), kind == 0, "{:?}", point);
            }
        }
    }
}

#[test]
fn test_rotation_keeps_field_of_view() {
    let mut wide = Pose::<f64>::classic();
    let mut narrow = Pose::<f32>::classic();
    let wide_angle = wide.direction.angle_to(wide.plane);
    let narrow_angle = narrow.direction.angle_to(narrow.plane);

    for i in 0..500 {
        let angle = if i % 3 == 0 { -0.37 } else { 0.11 };
        wide.rotate(angle);
        narrow.rotate(angle as f32);

        assert!((wide.direction.angle_to(wide.plane) - wide_angle).abs() < 1e-9);
        assert!((narrow.direction.angle_to(narrow.plane) - narrow_angle).abs() < 1e-3);
    }
}

#[test]
fn test_open_map_is_reported() {
    let grid = Grid::parse(
        "\
11111
10000
11111",
    )
    .unwrap();
    assert!(!grid.is_enclosed());

    let renderer = Renderer::new(RenderConfig::new(4, 4));
    let pose = Pose::new(
        Point2::new(1.5, 1.5),
        Vector2::new(1.0, 0.0),
        Vector2::new(0.0, 0.66),
    );

    let err = renderer.draw_calls(&pose, &grid).unwrap_err();
    assert_eq!(
        err.downcast_ref::<RenderError>(),
        Some(&RenderError::OutOfBounds {
            cell: GridLocation::new(5, 1)
        })
    );

    let parallel = Renderer::new(RenderConfig::new(4, 4).parallel(true));
    assert!(parallel.cast_frame(&pose, &grid).is_err());
}

#[test]
fn test_failed_frame_leaves_surface_untouched() {
    let grid = Grid::parse(
        "\
11111
10000
11111",
    )
    .unwrap();
    // the first columns still hit the top wall, later ones escape east
    let pose = Pose::new(
        Point2::new(3.5, 1.5),
        Vector2::new(1.0, 0.0),
        Vector2::new(0.0, 0.66),
    );

    for parallel in [false, true] {
        let renderer = Renderer::new(RenderConfig::new(4, 4).parallel(parallel));
        assert!(renderer.cast_stripe(&pose, 0, &grid).is_ok());

        let mut fb = FrameBuffer::new(4, 4);
        let err = renderer.render_frame(&pose, &grid, &mut fb).unwrap_err();
        assert_eq!(
            err.downcast_ref::<RenderError>(),
            Some(&RenderError::OutOfBounds {
                cell: GridLocation::new(5, 1)
            })
        );
        assert_eq!(fb, FrameBuffer::new(4, 4), "parallel: {}", parallel);

        let mut calls: Vec<DrawCommand> = Vec::new();
        assert!(renderer.render_frame(&pose, &grid, &mut calls).is_err());
        assert!(calls.is_empty());
    }
}

#[test]
fn test_frame_buffer_scenario() {
    let grid = Grid::bordered(5, 5, 1).unwrap();
    let renderer = Renderer::new(RenderConfig::new(4, 4));
    let pose = Pose::new(
        Point2::new(2.5, 2.5),
        Vector2::new(-1.0, 0.0),
        Vector2::new(0.0, 0.66),
    );

    let mut fb = FrameBuffer::new(4, 4);
    renderer.render_frame(&pose, &grid, &mut fb).unwrap();

    for x in 0..4 {
        assert_eq!(fb.pixel(x, 0), Some(0));
        for y in 1..4 {
            assert_eq!(fb.pixel(x, y), Some(0xFF0000), "({}, {})", x, y);
        }
    }
}

#[test]
fn test_standing_on_grid_line_next_to_wall_draws_full_column() {
    let grid = Grid::bordered(5, 5, 1).unwrap();
    let renderer = Renderer::new(RenderConfig::new(4, 4));
    // x exactly on the line shared with the west wall
    let pose = Pose::new(
        Point2::new(1.0, 2.5),
        Vector2::new(-1.0, 0.0),
        Vector2::new(0.0, 0.66),
    );

    let stripe = renderer.cast_stripe(&pose, 2, &grid).unwrap();
    assert_eq!((stripe.draw_start, stripe.draw_end), (0, 3));
}

#[test]
fn test_benchmark_workload_stays_in_free_cells() {
    // render, forward, render, back, render, turn, render; as the demo loop does
    let grid = Grid::classic().unwrap();
    let renderer = Renderer::new(RenderConfig::new(64, 48));
    let speeds = Speeds::default();
    let frame_time = 0.1;
    let mut pose = Pose::<f64>::classic();

    let forward = Controls {
        forward: true,
        ..Default::default()
    };
    let backward = Controls {
        backward: true,
        ..Default::default()
    };
    let left = Controls {
        turn_left: true,
        ..Default::default()
    };

    for _ in 0..200 {
        renderer.draw_calls(&pose, &grid).unwrap();
        pose = pose.update(forward, &grid, frame_time, speeds).unwrap();
        renderer.draw_calls(&pose, &grid).unwrap();
        pose = pose.update(backward, &grid, frame_time, speeds).unwrap();
        renderer.draw_calls(&pose, &grid).unwrap();
        pose = pose.update(left, &grid, frame_time, speeds).unwrap();
        renderer.draw_calls(&pose, &grid).unwrap();

        assert!(grid.can_move(pose.position).unwrap());
    }
}
