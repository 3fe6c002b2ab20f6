extern crate nalgebra_glm as glm;
use glm::Vec3;

pub type Triangle = [Vec3; 3];

pub fn area(triangle: &Triangle) -> f32 {
    let sides = [triangle[1] - triangle[0], triangle[2] - triangle[0]];
    return sides[0].cross(&sides[1]).magnitude() * 0.5;
}

/// Groups a flat position list into triangles, dropping any trailing partial triangle
pub fn from_positions(positions: &[[f32; 3]]) -> Vec<Triangle> {
    return positions
        .chunks_exact(3)
        .map(|chunk| [
            Vec3::from(chunk[0]),
            Vec3::from(chunk[1]),
            Vec3::from(chunk[2])])
        .collect();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_of_half_unit_square() {
        let triangle = [
            Vec3::new(0., 0., 0.),
            Vec3::new(1., 0., 0.),
            Vec3::new(0., 1., 0.)];
        assert!((area(&triangle) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn positions_group_into_triangles() {
        let positions = [
            [0., 0., 0.], [1., 0., 0.], [0., 1., 0.],
            [1., 1., 0.], [0., 1., 0.], [1., 0., 0.],
            [9., 9., 9.]];
        let triangles = from_positions(&positions);
        assert_eq!(triangles.len(), 2);
        assert_eq!(triangles[1][0], Vec3::new(1., 1., 0.));
        assert!(triangles.iter().all(|t| (area(t) - 0.5).abs() < 1e-6));
    }

    #[test]
    fn collinear_points_have_no_area() {
        let triangles = from_positions(&[[-1., -1., 0.], [0., 0., 0.], [2., 2., 0.]]);
        assert_eq!(area(&triangles[0]), 0.);
    }
}
