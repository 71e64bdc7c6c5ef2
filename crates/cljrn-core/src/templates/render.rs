//! Text templates for the generated ClojureScript project

use crate::project::ProjectDescriptor;

/// Contents written to `index.js`; loads the shadow-cljs output
pub const ENTRYPOINT_SOURCE: &str = "import './app/index.js';";

/// Render `shadow-cljs.edn` for a project
pub fn shadow_config(reagent_version: &str, namespace: &str) -> String {
    format!(
        r#"{{:source-paths
 ["src/main"]

 :dependencies
 [[reagent "{reagent_version}"]]

 :builds
 {{:app
  {{:target :react-native
   :init-fn {namespace}.core/init
   :output-dir "app"
   :js-options {{:js-package-dirs ["node_modules"]}}}}}}}}
"#
    )
}

/// Render the demo `core.cljs` that registers the app root component
pub fn core_source(project_name: &str, namespace: &str) -> String {
    format!(
        r#"(ns {namespace}.core
  (:require
    ["react-native" :as rn :refer [AppRegistry]]
    [reagent.core :as r]))

(defn app-root []
  (let [show-react-logo (r/atom true)]
   (fn []
     (js/setTimeout #(swap! show-react-logo not) 1000)
     [:> rn/View {{:style {{:flex 1
                          :justify-content :center
                          :align-items :center}}}}
      [:> rn/Text {{:style {{:font-size 40
                           :text-align :center}}}}
       "Welcome to
Clojure
app development"]
      [:> rn/View {{:style {{:flex-direction :row}}}}
       [:> rn/Image {{:source (js/require "../assets/hickey.png")
                     :style {{:width 100 :height 100}}}}]
         [:> rn/Image {{:source {{:uri (if @show-react-logo
                                       "https://reactnative.dev/img/tiny_logo.png"
                                       "https://upload.wikimedia.org/wikipedia/commons/8/85/Clojure-icon.png")}}
                       :style {{:width 50 :height 50}}}}]]])))

(defn start []
  (.registerComponent AppRegistry
                      "{project_name}"
                      #(r/reactify-component app-root)))

(defn ^:export init []
  (start))
"#
    )
}

/// Both rendered source templates for a project
pub fn render_all(project: &ProjectDescriptor, reagent_version: &str) -> (String, String) {
    (
        shadow_config(reagent_version, &project.namespace),
        core_source(&project.name, &project.namespace),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shadow_config_substitutions() {
        let config = shadow_config("1.2.0", "my-cool-app");
        assert!(config.starts_with("{:source-paths\n [\"src/main\"]\n"));
        assert!(config.contains("[[reagent \"1.2.0\"]]"));
        assert!(config.contains(":init-fn my-cool-app.core/init"));
        assert!(config.ends_with(":js-options {:js-package-dirs [\"node_modules\"]}}}}\n"));
    }

    #[test]
    fn test_core_source_substitutions() {
        let source = core_source("MyCoolApp", "my-cool-app");
        assert!(source.starts_with("(ns my-cool-app.core\n"));
        assert!(source.contains("                      \"MyCoolApp\"\n"));
        assert!(source.contains("\"Welcome to\nClojure\napp development\""));
        assert!(source.contains("[:> rn/View {:style {:flex 1\n"));
        assert!(source.contains("(js/require \"../assets/hickey.png\")"));
    }

    #[test]
    fn test_render_all_uses_descriptor_fields() {
        let project = ProjectDescriptor::new("AwesomeProject");
        let (config, source) = render_all(&project, "1.1.1");
        assert!(config.contains(":init-fn awesome-project.core/init"));
        assert!(source.contains("(ns awesome-project.core"));
        assert!(source.contains("\"AwesomeProject\""));
    }
}
