use lumen_trace::{Camera, Color, Facing, Material, Plane, Sphere, Square, Triangle, Vec3};
use lumen_trace::{PlayArea, Scene};

/// Fixed demo level: a checkered floor with a few shapes in front of spawn.
pub fn demo_scene() -> Scene {
    let floor = Material::checker(Color::gray(190), Color::gray(70));

    Scene::default()
        .with(Plane::floor(-1.0, floor))
        .with(Sphere::new(Vec3::new(0.0, 0.0, 4.0), 1.0, Color::new(220, 60, 50)))
        .with(Sphere::new(Vec3::new(-2.5, -0.4, 6.0), 0.6, Color::new(60, 160, 230)))
        .with(Sphere::new(Vec3::new(3.0, 0.5, 8.0), 1.5, Color::new(240, 200, 60)))
        .with(Triangle::new(
            Vec3::new(-4.0, -1.0, 9.0),
            Vec3::new(-1.0, -1.0, 10.0),
            Vec3::new(-2.5, 2.0, 9.5),
            Color::new(90, 210, 110),
        ))
        .with(Square::new(Vec3::new(0.0, 1.0, 12.0), 4.0, Color::new(180, 120, 220)))
        .with(Square::oriented(
            Vec3::new(6.0, 0.5, 5.0),
            3.0,
            Facing::X,
            Color::new(230, 140, 60),
        ))
}

/// Spawn point a little above the floor, looking down +Z.
pub fn spawn_camera() -> Camera {
    Camera::new(Vec3::new(0.0, 0.2, 0.0))
}

/// World rectangle mapped onto the peer overlay.
pub fn play_area() -> PlayArea {
    PlayArea { min_x: -10.0, max_x: 10.0, min_z: -5.0, max_z: 15.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_looks_at_the_red_sphere() {
        let scene = demo_scene();
        let cam = spawn_camera();
        let hit = scene
            .nearest_hit(cam.position, cam.rotate(Vec3::new(0.0, 0.0, 1.0)))
            .unwrap();
        assert_eq!(hit.index, 1);
        assert!(hit.distance > 2.9 && hit.distance < 3.1);
    }

    #[test]
    fn looking_down_hits_the_floor() {
        let scene = demo_scene();
        let cam = spawn_camera().with_orientation(0.0, -std::f32::consts::FRAC_PI_2);
        let hit = scene
            .nearest_hit(cam.position, cam.rotate(Vec3::new(0.0, 0.0, 1.0)))
            .unwrap();
        assert_eq!(hit.index, 0);
        assert!((hit.distance - 1.2).abs() < 1e-4);
    }

    #[test]
    fn spawn_is_inside_play_area() {
        let (x, y) = play_area().normalize(&spawn_camera());
        assert!((0.0..=1.0).contains(&x) && (0.0..=1.0).contains(&y));
    }
}
