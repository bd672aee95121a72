use crate::courses::CourseLink;

/// (key, [(title, url, platform)]); scanned in order; the first key that
/// overlaps the skill wins.
const CURATED_COURSES: &[(&str, &[(&str, &str, &str)])] = &[
    (
        "python",
        &[
            (
                "Python for Everybody (Coursera)",
                "https://www.coursera.org/specializations/python",
                "Coursera",
            ),
            (
                "Complete Python Bootcamp (Udemy)",
                "https://www.udemy.com/course/complete-python-bootcamp/",
                "Udemy",
            ),
        ],
    ),
    (
        "java",
        &[
            (
                "Java Programming Masterclass (Udemy)",
                "https://www.udemy.com/course/java-the-complete-java-developer-course/",
                "Udemy",
            ),
            (
                "Object Oriented Java Programming (Coursera)",
                "https://www.coursera.org/learn/object-oriented-java",
                "Coursera",
            ),
        ],
    ),
    (
        "javascript",
        &[
            (
                "JavaScript - The Complete Guide (Udemy)",
                "https://www.udemy.com/course/javascript-the-complete-guide-2020-beginner-advanced/",
                "Udemy",
            ),
            (
                "Modern JavaScript (freeCodeCamp)",
                "https://www.freecodecamp.org/learn/javascript-algorithms-and-data-structures/",
                "freeCodeCamp",
            ),
        ],
    ),
    (
        "machine learning",
        &[
            (
                "Machine Learning by Andrew Ng",
                "https://www.coursera.org/learn/machine-learning",
                "Coursera",
            ),
            (
                "Fast.ai Practical Deep Learning",
                "https://course.fast.ai/",
                "Fast.ai",
            ),
        ],
    ),
    (
        "deep learning",
        &[
            (
                "Deep Learning Specialization",
                "https://www.coursera.org/specializations/deep-learning",
                "Coursera",
            ),
            (
                "Practical Deep Learning for Coders",
                "https://course.fast.ai/",
                "Fast.ai",
            ),
        ],
    ),
    (
        "pytorch",
        &[
            (
                "PyTorch for Deep Learning (Udacity)",
                "https://www.udacity.com/course/deep-learning-pytorch--ud188",
                "Udacity",
            ),
            (
                "PyTorch Official Tutorials",
                "https://pytorch.org/tutorials/",
                "PyTorch",
            ),
        ],
    ),
    (
        "tensorflow",
        &[
            (
                "TensorFlow Developer Certificate",
                "https://www.coursera.org/professional-certificates/tensorflow-in-practice",
                "Coursera",
            ),
            (
                "TensorFlow 2.0 Complete Course",
                "https://www.freecodecamp.org/news/massive-tensorflow-2-0-free-course/",
                "freeCodeCamp",
            ),
        ],
    ),
    (
        "aws",
        &[
            (
                "AWS Cloud Practitioner Essentials",
                "https://www.coursera.org/learn/aws-cloud-practitioner-essentials",
                "Coursera",
            ),
            (
                "AWS Certified Solutions Architect",
                "https://www.udemy.com/course/aws-certified-solutions-architect-associate/",
                "Udemy",
            ),
        ],
    ),
    (
        "docker",
        &[
            (
                "Docker for Beginners",
                "https://www.udemy.com/course/docker-tutorial-for-devops-run-docker-containers/",
                "Udemy",
            ),
            (
                "Docker Official Documentation",
                "https://docs.docker.com/get-started/",
                "Docker",
            ),
        ],
    ),
    (
        "kubernetes",
        &[
            (
                "Kubernetes for Beginners (Udemy)",
                "https://www.udemy.com/course/learn-kubernetes/",
                "Udemy",
            ),
            (
                "Kubernetes Official Tutorials",
                "https://kubernetes.io/docs/tutorials/",
                "Kubernetes",
            ),
        ],
    ),
    (
        "react",
        &[
            (
                "React - The Complete Guide (Udemy)",
                "https://www.udemy.com/course/react-the-complete-guide-incl-redux/",
                "Udemy",
            ),
            (
                "React Official Tutorial",
                "https://react.dev/learn",
                "React",
            ),
        ],
    ),
    (
        "angular",
        &[
            (
                "Angular - The Complete Guide (Udemy)",
                "https://www.udemy.com/course/the-complete-guide-to-angular-2/",
                "Udemy",
            ),
            (
                "Angular Official Tutorial",
                "https://angular.io/tutorial",
                "Angular",
            ),
        ],
    ),
    (
        "node",
        &[
            (
                "Node.js - The Complete Guide (Udemy)",
                "https://www.udemy.com/course/nodejs-the-complete-guide/",
                "Udemy",
            ),
            (
                "Node.js Official Guides",
                "https://nodejs.org/en/docs/guides/",
                "Node.js",
            ),
        ],
    ),
    (
        "sql",
        &[
            (
                "The Complete SQL Bootcamp (Udemy)",
                "https://www.udemy.com/course/the-complete-sql-bootcamp/",
                "Udemy",
            ),
            (
                "SQL for Data Science (Coursera)",
                "https://www.coursera.org/learn/sql-for-data-science",
                "Coursera",
            ),
        ],
    ),
    (
        "data science",
        &[
            (
                "Data Science Specialization (Coursera)",
                "https://www.coursera.org/specializations/jhu-data-science",
                "Coursera",
            ),
            (
                "Python for Data Science (Udemy)",
                "https://www.udemy.com/course/python-for-data-science-and-machine-learning-bootcamp/",
                "Udemy",
            ),
        ],
    ),
    (
        "git",
        &[
            (
                "Git Complete: The Definitive Guide (Udemy)",
                "https://www.udemy.com/course/git-complete/",
                "Udemy",
            ),
            (
                "Git Official Documentation",
                "https://git-scm.com/doc",
                "Git",
            ),
        ],
    ),
];

/// Curated courses for a skill. Matches when the skill contains the key or the
/// key contains the skill; unmatched skills get a single web-search link.
pub fn curated_courses(skill: &str) -> Vec<CourseLink> {
    let skill_lower = skill.to_lowercase();
    let matched = CURATED_COURSES
        .iter()
        .find(|(key, _)| skill_lower.contains(key) || key.contains(skill_lower.as_str()));

    match matched {
        Some((_, courses)) => courses
            .iter()
            .map(|(title, url, platform)| CourseLink {
                title: title.to_string(),
                url: url.to_string(),
                platform: platform.to_string(),
            })
            .collect(),
        None => vec![CourseLink {
            title: format!("{skill} Fundamentals"),
            url: format!(
                "https://www.google.com/search?q={}+course",
                skill.trim().replace(' ', "+")
            ),
            platform: "Search".to_string(),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_sixteen_entries() {
        assert_eq!(CURATED_COURSES.len(), 16);
    }

    #[test]
    fn test_exact_key_match() {
        let courses = curated_courses("Docker");
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[1].platform, "Docker");
    }

    #[test]
    fn test_skill_containing_key_matches() {
        // "javascript" contains "java", and java comes first in table order.
        let courses = curated_courses("JavaScript");
        assert!(courses[0].title.starts_with("Java Programming"));
    }

    #[test]
    fn test_key_containing_skill_matches() {
        // No key is inside "act", but "react" contains it.
        let courses = curated_courses("act");
        assert!(courses[0].title.starts_with("React"));
    }

    #[test]
    fn test_unknown_skill_gets_search_link() {
        let courses = curated_courses("Haskell");
        assert_eq!(
            courses,
            vec![CourseLink {
                title: "Haskell Fundamentals".to_string(),
                url: "https://www.google.com/search?q=Haskell+course".to_string(),
                platform: "Search".to_string(),
            }]
        );
    }
}
