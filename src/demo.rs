use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::{Pod, Service};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

pub const CLUSTER: &str = "my-service.cluster.local";
pub const NAMESPACE: &str = "default";

const POD_NAMES: [&str; 14] = [
    "front-app-abcd1234-abcdef",
    "front-app-abcd1234-019bbi",
    "front-app-abcd1234-xb4k10",
    "front-app-abcd1234-zb8kk3",
    "front-app-abcd1234-487bk2",
    "auth-app-u90211bs-9b811a",
    "auth-app-u90211bs-76bny3",
    "auth-app-u90211bs-mvkq03",
    "async-queue-9nb019f8-90g935",
    "async-queue-9nb019f8-bjdk54",
    "async-queue-9nb019f8-eetjb9",
    "job-scheduler-b913mgl3-f92y4j",
    "job-scheduler-b913mgl3-019bl1",
    "job-scheduler-b913mgl3-912333",
];

const SERVICE_NAMES: [&str; 6] = [
    "front-app",
    "auth-app",
    "async-queue",
    "job-scheduler",
    "front-rds",
    "job-rds",
];

const DEPLOYMENT_NAMES: [&str; 4] = ["front-app", "auth-app", "async-queue", "job-scheduler"];

pub const INFO: &str = r#"
Name:  nginx-deployment-1006230814-6winp
Namespace: default
Node:  kubernetes-node-wul5/10.240.0.9
Start Time: Thu, 24 Mar 2016 01:39:49 +0000
Labels:  app=nginx,pod-template-hash=1006230814
Annotations:    kubernetes.io/created-by={"kind":"SerializedReference","apiVersion":"v1","reference":{"kind":"ReplicaSet","namespace":"default","name":"nginx-deployment-1956810328","uid":"14e607e7-8ba1-11e7-b5cb-fa16" ...
Status:  Running
IP:  10.244.0.6
Controllers: ReplicaSet/nginx-deployment-1006230814
Containers:
  nginx:
    Container ID: docker://90315cc9f513c724e9957a4788d3e625a078de84750f244a40f97ae355eb1149
    Image:  nginx
    Image ID:  docker://6f62f48c4e55d700cf3eb1b5e33fa051802986b77b874cc351cce539e5163707
    Port:  80/TCP
    QoS Tier:
      cpu: Guaranteed
      memory: Guaranteed
    Limits:
      cpu: 500m
      memory: 128Mi
    Requests:
      memory:  128Mi
      cpu:  500m
    State:  Running
      Started:  Thu, 24 Mar 2016 01:39:51 +0000
    Ready:  True
    Restart Count: 0
    Environment:        <none>
    Mounts:
      /var/run/secrets/kubernetes.io/serviceaccount from default-token-5kdvl (ro)
Conditions:
  Type          Status
  Initialized   True
  Ready         True
  PodScheduled  True
Volumes:
  default-token-4bcbi:
    Type: Secret (a volume populated by a Secret)
    SecretName: default-token-4bcbi
    Optional:   false
QoS Class:      Guaranteed
Node-Selectors: <none>
Tolerations:    <none>
Events:
  FirstSeen LastSeen Count From     SubobjectPath  Type  Reason  Message
  --------- -------- ----- ----     -------------  -------- ------  -------
  54s  54s  1 {default-scheduler }      Normal  Scheduled Successfully assigned nginx-deployment-1006230814-6winp to kubernetes-node-wul5
  54s  54s  1 {kubelet kubernetes-node-wul5} spec.containers{nginx} Normal  Pulling  pulling image "nginx"
  53s  53s  1 {kubelet kubernetes-node-wul5} spec.containers{nginx} Normal  Pulled  Successfully pulled image "nginx"
  53s  53s  1 {kubelet kubernetes-node-wul5} spec.containers{nginx} Normal  Created  Created container with docker id 90315cc9f513
  53s  53s  1 {kubelet kubernetes-node-wul5} spec.containers{nginx} Normal  Started  Started container with docker id 90315cc9f513
"#;

fn named(name: &str) -> ObjectMeta {
    ObjectMeta {
        name: Some(name.to_string()),
        ..ObjectMeta::default()
    }
}

pub fn pods() -> Vec<Pod> {
    POD_NAMES
        .iter()
        .map(|name| Pod {
            metadata: named(name),
            ..Pod::default()
        })
        .collect()
}

pub fn services() -> Vec<Service> {
    SERVICE_NAMES
        .iter()
        .map(|name| Service {
            metadata: named(name),
            ..Service::default()
        })
        .collect()
}

pub fn deployments() -> Vec<Deployment> {
    DEPLOYMENT_NAMES
        .iter()
        .map(|name| Deployment {
            metadata: named(name),
            ..Deployment::default()
        })
        .collect()
}
